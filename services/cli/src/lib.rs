mod cli;
mod commands;
mod render;

use trust_aid::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

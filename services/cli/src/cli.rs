use crate::commands::{run_explain, run_rank, ExplainArgs, RankArgs};
use clap::{Parser, Subcommand};
use trust_aid::config::AppConfig;
use trust_aid::error::AppError;
use trust_aid::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "trust-aid",
    about = "Score beneficiary intake exports and rank households by need",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank every beneficiary in an intake export by need score
    Rank(RankArgs),
    /// Show the score breakdown and avatar for one beneficiary
    Explain(ExplainArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Rank(args) => run_rank(args, &config),
        Command::Explain(args) => run_explain(args, &config),
    }
}

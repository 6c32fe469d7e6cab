mod common;
mod intake;
mod report;

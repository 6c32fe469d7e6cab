use crate::render::{render_explanation, render_rank_report, Explanation, RankView};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;
use trust_aid::beneficiary::{
    assess, classify_avatar_category, BeneficiaryImporter, BeneficiaryRecord, IntakeFormat,
    PriorityReport,
};
use trust_aid::config::AppConfig;
use trust_aid::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Intake export to score (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Override format detection (json or csv)
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<IntakeFormat>,
    /// Only print the first N beneficiaries
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Emit the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ExplainArgs {
    /// Intake export containing the beneficiary (.json or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Beneficiary id to explain
    #[arg(long)]
    pub(crate) id: String,
    /// Override format detection (json or csv)
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<IntakeFormat>,
    /// Emit the breakdown as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_format(raw: &str) -> Result<IntakeFormat, String> {
    IntakeFormat::parse(raw).ok_or_else(|| format!("unknown intake format '{raw}' (json|csv)"))
}

fn load_records(
    input: &Path,
    format: Option<IntakeFormat>,
    config: &AppConfig,
) -> Result<Vec<BeneficiaryRecord>, AppError> {
    let format = IntakeFormat::detect(input, format, config.intake.default_format)?;
    Ok(BeneficiaryImporter::from_path(input, format)?)
}

pub(crate) fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let RankArgs {
        input,
        format,
        limit,
        json,
        as_of,
    } = args;

    info!(input = %input.display(), "ranking beneficiaries");
    let records = load_records(&input, format, config)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let mut report = PriorityReport::build(&records, as_of);
    // Summary covers the whole batch, not just the printed entries.
    let summary = report.summary();
    if let Some(limit) = limit {
        report.entries.truncate(limit);
    }

    if json {
        let view = RankView {
            report: &report,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_rank_report(&report, &summary));
    }

    Ok(())
}

pub(crate) fn run_explain(args: ExplainArgs, config: &AppConfig) -> Result<(), AppError> {
    let ExplainArgs {
        input,
        id,
        format,
        json,
    } = args;

    info!(input = %input.display(), beneficiary = %id, "explaining assessment");
    let records = load_records(&input, format, config)?;
    let record = find_record(&records, &id)?;

    let outcome = assess(record);
    let avatar = classify_avatar_category(record);
    let explanation = Explanation {
        id: &id,
        name: record.display_name(),
        avatar,
        avatar_path: avatar.asset_path(&config.avatars.base_path),
        outcome,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&explanation)?);
    } else {
        print!("{}", render_explanation(&explanation));
    }

    Ok(())
}

fn find_record<'a>(
    records: &'a [BeneficiaryRecord],
    id: &str,
) -> Result<&'a BeneficiaryRecord, AppError> {
    records
        .iter()
        .find(|record| record.id.as_deref() == Some(id))
        .ok_or_else(|| AppError::BeneficiaryNotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2025-06-30 "),
            Ok(NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date"))
        );
        assert!(parse_date("30/06/2025").is_err());
    }

    #[test]
    fn parse_format_is_case_insensitive() {
        assert_eq!(parse_format("JSON"), Ok(IntakeFormat::Json));
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn find_record_reports_missing_ids() {
        let records = vec![BeneficiaryRecord {
            id: Some("B-1".to_string()),
            ..BeneficiaryRecord::default()
        }];

        assert!(find_record(&records, "B-1").is_ok());
        match find_record(&records, "B-9") {
            Err(AppError::BeneficiaryNotFound { id }) => assert_eq!(id, "B-9"),
            other => panic!("expected not found, got {other:?}"),
        }
    }
}

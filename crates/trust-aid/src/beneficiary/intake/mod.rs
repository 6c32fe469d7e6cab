mod parser;

use super::domain::BeneficiaryRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read intake export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid intake JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid intake CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("cannot tell the intake format of '{}'; use a .json or .csv file or pass a format", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Layout of an intake export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeFormat {
    /// JSON array of beneficiary objects.
    Json,
    /// Header row of field names; list cells are `;`-separated.
    Csv,
}

impl IntakeFormat {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    /// An explicit choice wins, then the file extension, then `fallback`.
    pub fn detect(
        path: &Path,
        explicit: Option<IntakeFormat>,
        fallback: Option<IntakeFormat>,
    ) -> Result<Self, ImportError> {
        explicit
            .or_else(|| Self::from_extension(path))
            .or(fallback)
            .ok_or_else(|| ImportError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    pub const fn label(self) -> &'static str {
        match self {
            IntakeFormat::Json => "json",
            IntakeFormat::Csv => "csv",
        }
    }
}

pub struct BeneficiaryImporter;

impl BeneficiaryImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        format: IntakeFormat,
    ) -> Result<Vec<BeneficiaryRecord>, ImportError> {
        let path = path.as_ref();
        debug!(path = %path.display(), format = format.label(), "opening intake export");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: IntakeFormat,
    ) -> Result<Vec<BeneficiaryRecord>, ImportError> {
        let records = match format {
            IntakeFormat::Json => serde_json::from_reader::<_, Vec<BeneficiaryRecord>>(reader)?,
            IntakeFormat::Csv => parser::parse_records(reader)?,
        };

        info!(
            count = records.len(),
            format = format.label(),
            "loaded beneficiary records"
        );
        Ok(records)
    }
}

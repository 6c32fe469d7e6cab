use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::{BeneficiaryRecord, Gender};

/// Display bucket used to pick a beneficiary's avatar image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvatarCategory {
    #[serde(rename = "female-toddler")]
    FemaleToddler,
    #[serde(rename = "female-teenager")]
    FemaleTeenager,
    #[serde(rename = "female-senior")]
    FemaleSenior,
    #[serde(rename = "female-married")]
    FemaleMarried,
    #[serde(rename = "female-unmarried")]
    FemaleUnmarried,
    #[serde(rename = "male-toddler")]
    MaleToddler,
    #[serde(rename = "male-teenager")]
    MaleTeenager,
    #[serde(rename = "male-senior")]
    MaleSenior,
    #[serde(rename = "male-married")]
    MaleMarried,
    #[serde(rename = "male-unmarried")]
    MaleUnmarried,
}

/// Key, category and image file for every mapped bucket.
static AVATAR_TABLE: [(&str, AvatarCategory, &str); 10] = [
    ("female-toddler", AvatarCategory::FemaleToddler, "female-toddler.jpg"),
    ("female-teenager", AvatarCategory::FemaleTeenager, "female-teenage.jpg"),
    ("female-senior", AvatarCategory::FemaleSenior, "female-senior.jpg"),
    ("female-married", AvatarCategory::FemaleMarried, "female-married.jpg"),
    ("female-unmarried", AvatarCategory::FemaleUnmarried, "female-unmarried.jpg"),
    ("male-toddler", AvatarCategory::MaleToddler, "male-toddler.jpg"),
    ("male-teenager", AvatarCategory::MaleTeenager, "male-teenage.jpg"),
    ("male-senior", AvatarCategory::MaleSenior, "male-senior.jpg"),
    ("male-married", AvatarCategory::MaleMarried, "male-married.jpg"),
    ("male-unmarried", AvatarCategory::MaleUnmarried, "male-unmarried.jpg"),
];

impl AvatarCategory {
    /// Returned for any key missing from the table, e.g. gender `other` or absent.
    pub const FALLBACK: AvatarCategory = AvatarCategory::MaleUnmarried;

    pub fn from_key(key: &str) -> Option<Self> {
        AVATAR_TABLE
            .iter()
            .find(|(candidate, _, _)| *candidate == key)
            .map(|(_, category, _)| *category)
    }

    pub fn all() -> impl Iterator<Item = AvatarCategory> {
        AVATAR_TABLE.iter().map(|(_, category, _)| *category)
    }

    pub fn key(self) -> &'static str {
        self.entry().0
    }

    pub fn asset_file(self) -> &'static str {
        self.entry().2
    }

    /// Image path under `base`, e.g. `/images/avatar/female-teenage.jpg`.
    pub fn asset_path(self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.asset_file())
    }

    fn entry(self) -> &'static (&'static str, AvatarCategory, &'static str) {
        let index = match self {
            AvatarCategory::FemaleToddler => 0,
            AvatarCategory::FemaleTeenager => 1,
            AvatarCategory::FemaleSenior => 2,
            AvatarCategory::FemaleMarried => 3,
            AvatarCategory::FemaleUnmarried => 4,
            AvatarCategory::MaleToddler => 5,
            AvatarCategory::MaleTeenager => 6,
            AvatarCategory::MaleSenior => 7,
            AvatarCategory::MaleMarried => 8,
            AvatarCategory::MaleUnmarried => 9,
        };
        &AVATAR_TABLE[index]
    }
}

impl fmt::Display for AvatarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Age tier derived from the recorded age. Absent age counts as adult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTier {
    Toddler,
    Teenager,
    Adult,
    Senior,
}

impl AgeTier {
    pub fn from_age(age: Option<i32>) -> Self {
        match age {
            Some(age) if age < 13 => Self::Toddler,
            Some(age) if age < 20 => Self::Teenager,
            Some(age) if age >= 60 => Self::Senior,
            _ => Self::Adult,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AgeTier::Toddler => "toddler",
            AgeTier::Teenager => "teenager",
            AgeTier::Adult => "adult",
            AgeTier::Senior => "senior",
        }
    }
}

/// Picks the avatar bucket for a record. Total: unmapped combinations fall back to
/// [`AvatarCategory::FALLBACK`].
pub fn classify_avatar_category(record: &BeneficiaryRecord) -> AvatarCategory {
    let tier = AgeTier::from_age(record.age);
    let bucket = match tier {
        AgeTier::Adult if record.is_married() => "married",
        AgeTier::Adult => "unmarried",
        other => other.label(),
    };

    let gender = record.gender.map_or("", Gender::label);
    let key = format!("{gender}-{bucket}");

    AvatarCategory::from_key(&key).unwrap_or(AvatarCategory::FALLBACK)
}

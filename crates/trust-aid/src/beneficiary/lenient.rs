//! Tolerant field decoders for intake exports.
//!
//! Intake forms post every value as text, and older exports mix numbers and strings
//! for the same column. Each decoder accepts whatever shape arrives and maps anything
//! it cannot interpret to the field's default rather than rejecting the record.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::domain::{Answer, Gender, PriorityLevel};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    List(Vec<Loose>),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl Loose {
    fn into_text(self) -> Option<String> {
        match self {
            Loose::Text(value) => Some(value),
            Loose::Unsigned(value) => Some(value.to_string()),
            Loose::Signed(value) => Some(value.to_string()),
            Loose::Float(value) => Some(value.to_string()),
            Loose::Bool(value) => Some(value.to_string()),
            Loose::List(_) | Loose::Other(_) => None,
        }
    }

    fn into_float(self) -> Option<f64> {
        match self {
            Loose::Unsigned(value) => Some(value as f64),
            Loose::Signed(value) => Some(value as f64),
            Loose::Float(value) => Some(value),
            Loose::Text(value) => value.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|value| value.is_finite())
    }
}

fn loose<'de, D>(deserializer: D) -> Result<Option<Loose>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?.and_then(Loose::into_text))
}

pub(crate) fn gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.as_deref().and_then(Gender::parse))
}

pub(crate) fn answer<'de, D>(deserializer: D) -> Result<Option<Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.as_deref().and_then(Answer::parse))
}

pub(crate) fn priority<'de, D>(deserializer: D) -> Result<Option<PriorityLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(deserializer)?.as_deref().and_then(PriorityLevel::parse))
}

pub(crate) fn age<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?
        .and_then(Loose::into_float)
        .and_then(whole_number)
        .and_then(|value| i32::try_from(value).ok()))
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_count(deserializer)?.unwrap_or(0))
}

pub(crate) fn optional_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?
        .and_then(Loose::into_float)
        .and_then(whole_number)
        .and_then(|value| u32::try_from(value).ok()))
}

pub(crate) fn amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose(deserializer)?
        .and_then(Loose::into_float)
        .filter(|value| *value >= 0.0))
}

pub(crate) fn list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match loose(deserializer)? {
        Some(Loose::List(items)) => Some(items.into_iter().filter_map(Loose::into_text).collect()),
        Some(Loose::Text(joined)) => Some(split_list(&joined)),
        _ => None,
    })
}

/// Parses a numeric cell the same way the JSON decoders do.
pub(crate) fn parse_age(raw: &str) -> Option<i32> {
    Loose::Text(raw.to_string())
        .into_float()
        .and_then(whole_number)
        .and_then(|value| i32::try_from(value).ok())
}

pub(crate) fn parse_count(raw: &str) -> Option<u32> {
    Loose::Text(raw.to_string())
        .into_float()
        .and_then(whole_number)
        .and_then(|value| u32::try_from(value).ok())
}

pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    Loose::Text(raw.to_string())
        .into_float()
        .filter(|value| *value >= 0.0)
}

/// Splits a `;`-separated cell, dropping blank entries.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn whole_number(value: f64) -> Option<i64> {
    if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_accept_whole_numbers_only() {
        assert_eq!(parse_count(" 3 "), Some(3));
        assert_eq!(parse_count("2.0"), Some(2));
        assert_eq!(parse_count("2.5"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("two"), None);
        assert_eq!(parse_age("-4"), Some(-4));
        assert_eq!(parse_age("45"), Some(45));
    }

    #[test]
    fn amounts_reject_negative_and_non_finite_values() {
        assert_eq!(parse_amount("1500.50"), Some(1500.5));
        assert_eq!(parse_amount("-10"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn list_cells_split_on_semicolons() {
        assert_eq!(split_list("Food; Medical;;"), vec!["Food", "Medical"]);
        assert!(split_list("  ").is_empty());
    }
}

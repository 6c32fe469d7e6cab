use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Label of the lowest income bracket on the intake form.
pub const LOWEST_BRACKET: &str = "0-10000";

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other scripts' digits.
    PATTERN.get_or_init(|| Regex::new(r"([0-9]+)-([0-9]+)").expect("income range pattern compiles"))
}

/// Converts an income range label into its representative monthly amount.
///
/// Returns `None` when the label is absent, empty, `"unknown"` (any case), or carries no
/// `<min>-<max>` pair. The first pair found anywhere in the label is used and the
/// midpoint rounds half up, so `"10001-20000"` yields `15001`.
pub fn normalize_income_range(label: Option<&str>) -> Option<u64> {
    let label = label?;
    if label == LOWEST_BRACKET {
        return Some(5000);
    }
    if label.is_empty() || label.eq_ignore_ascii_case("unknown") {
        return None;
    }

    let captures = range_pattern().captures(label)?;
    let min: u64 = captures[1].parse().ok()?;
    let max: u64 = captures[2].parse().ok()?;
    let sum = min.checked_add(max)?;

    Some(sum / 2 + sum % 2)
}

/// Income tiers recognized by the scorer.
///
/// The labels are matched literally and intentionally differ from the brackets offered
/// on the intake form ("10001-25000", "25001-50000", ...), which fall into `Unlisted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBracket {
    NotReported,
    UpTo10000,
    From10001To20000,
    From20001To30000,
    From30001To50000,
    Unlisted,
}

impl IncomeBracket {
    pub fn classify(label: Option<&str>) -> Self {
        match label {
            None | Some("") => Self::NotReported,
            Some(LOWEST_BRACKET) => Self::UpTo10000,
            Some("10001-20000") => Self::From10001To20000,
            Some("20001-30000") => Self::From20001To30000,
            Some("30001-50000") => Self::From30001To50000,
            Some(_) => Self::Unlisted,
        }
    }

    pub const fn points(self) -> i32 {
        match self {
            IncomeBracket::NotReported => 20,
            IncomeBracket::UpTo10000 => 25,
            IncomeBracket::From10001To20000 => 20,
            IncomeBracket::From20001To30000 => 10,
            IncomeBracket::From30001To50000 => 5,
            IncomeBracket::Unlisted => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            IncomeBracket::NotReported => "income not reported",
            IncomeBracket::UpTo10000 => "income 0-10000",
            IncomeBracket::From10001To20000 => "income 10001-20000",
            IncomeBracket::From20001To30000 => "income 20001-30000",
            IncomeBracket::From30001To50000 => "income 30001-50000",
            IncomeBracket::Unlisted => "income outside scored brackets",
        }
    }
}

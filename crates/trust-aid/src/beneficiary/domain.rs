use serde::{Deserialize, Serialize};

use super::lenient;

/// Gender as captured on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Case-insensitive parse. Blank input is absent; unrecognized text is `Other`.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        Some(match value.to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        })
    }

    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Yes/no answer. Only the exact lowercase literals are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// Priority a case worker recorded by hand. Carried for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PriorityLevel::High => "high",
            PriorityLevel::Medium => "medium",
            PriorityLevel::Low => "low",
        }
    }
}

/// Socioeconomic intake snapshot consumed by the scorer and the classifier.
///
/// Field names follow the intake export (camelCase). Decoding is lenient: numbers may
/// arrive as text and malformed values fall back to their defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryRecord {
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::gender")]
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient::age")]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub marital_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub monthly_income: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_dependent_children: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_independent_children: u32,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub education_expense: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub health_condition: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub chronic_illnesses: Option<String>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub disability: Option<Answer>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub health_insurance: Option<Answer>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub housing_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_count")]
    pub earning_members: Option<u32>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub assistance_needs: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub government_schemes: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub assets: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::priority", skip_serializing_if = "Option::is_none")]
    pub priority_level: Option<PriorityLevel>,
}

impl BeneficiaryRecord {
    /// Income label as reported. An empty label counts as not reported.
    pub fn income_label(&self) -> Option<&str> {
        self.monthly_income
            .as_deref()
            .filter(|label| !label.is_empty())
    }

    /// Dependent plus independent children.
    pub fn total_children(&self) -> u32 {
        self.number_of_dependent_children
            .saturating_add(self.number_of_independent_children)
    }

    pub fn earners(&self) -> u32 {
        self.earning_members.unwrap_or(0)
    }

    pub fn assistance_need_count(&self) -> usize {
        list_len(&self.assistance_needs)
    }

    pub fn government_scheme_count(&self) -> usize {
        list_len(&self.government_schemes)
    }

    pub fn asset_count(&self) -> usize {
        list_len(&self.assets)
    }

    pub fn is_married(&self) -> bool {
        matches_ignore_case(self.marital_status.as_deref(), "married")
    }

    pub fn reports_poor_health(&self) -> bool {
        matches_ignore_case(self.health_condition.as_deref(), "poor")
    }

    pub fn has_chronic_illness(&self) -> bool {
        self.chronic_illnesses
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }

    pub fn is_renting(&self) -> bool {
        matches_ignore_case(self.housing_status.as_deref(), "rented")
    }

    /// Display label for reports: name, then id, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("(unnamed)")
    }
}

fn list_len(list: &Option<Vec<String>>) -> usize {
    list.as_ref().map_or(0, Vec::len)
}

/// `literal` must already be lowercase.
fn matches_ignore_case(value: Option<&str>, literal: &str) -> bool {
    value.is_some_and(|value| value.to_lowercase() == literal)
}

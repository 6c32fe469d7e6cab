use super::super::domain::{Answer, BeneficiaryRecord, Gender, PriorityLevel};
use super::super::lenient::{parse_age, parse_amount, parse_count, split_list};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::debug;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<BeneficiaryRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (line, row) in csv_reader.deserialize::<IntakeRow>().enumerate() {
        let record = row?.into_record();
        debug!(row = line + 1, beneficiary = record.display_name(), "parsed intake row");
        records.push(record);
    }

    Ok(records)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct IntakeRow {
    #[serde(deserialize_with = "empty_string_as_none")]
    id: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    age: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    marital_status: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    monthly_income: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    number_of_dependent_children: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    number_of_independent_children: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    education_expense: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    health_condition: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    chronic_illnesses: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    disability: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    health_insurance: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    housing_status: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    earning_members: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    assistance_needs: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    government_schemes: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    assets: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    priority_level: Option<String>,
}

impl IntakeRow {
    fn into_record(self) -> BeneficiaryRecord {
        BeneficiaryRecord {
            id: self.id,
            name: self.name,
            gender: self.gender.as_deref().and_then(Gender::parse),
            age: self.age.as_deref().and_then(parse_age),
            marital_status: self.marital_status,
            monthly_income: self.monthly_income,
            number_of_dependent_children: self
                .number_of_dependent_children
                .as_deref()
                .and_then(parse_count)
                .unwrap_or(0),
            number_of_independent_children: self
                .number_of_independent_children
                .as_deref()
                .and_then(parse_count)
                .unwrap_or(0),
            education_expense: self.education_expense.as_deref().and_then(parse_amount),
            health_condition: self.health_condition,
            chronic_illnesses: self.chronic_illnesses,
            disability: self.disability.as_deref().and_then(Answer::parse),
            health_insurance: self.health_insurance.as_deref().and_then(Answer::parse),
            housing_status: self.housing_status,
            earning_members: self.earning_members.as_deref().and_then(parse_count),
            // A blank cell means the question was not answered; keep that distinct from `[]`.
            assistance_needs: self.assistance_needs.as_deref().map(split_list),
            government_schemes: self.government_schemes.as_deref().map(split_list),
            assets: self.assets.as_deref().map(split_list),
            priority_level: self.priority_level.as_deref().and_then(PriorityLevel::parse),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

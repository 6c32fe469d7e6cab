use crate::beneficiary::domain::{Answer, BeneficiaryRecord, Gender};

pub(super) fn items(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|value| value.to_string()).collect())
}

/// Record with nothing filled in beyond an owned home.
pub(super) fn blank_record() -> BeneficiaryRecord {
    BeneficiaryRecord {
        housing_status: Some("owned".to_string()),
        ..BeneficiaryRecord::default()
    }
}

/// Lowest income bracket, three children, poor health, disability, renting, two needs.
pub(super) fn struggling_household() -> BeneficiaryRecord {
    BeneficiaryRecord {
        id: Some("B-0002".to_string()),
        name: Some("Lakshmi".to_string()),
        gender: Some(Gender::Female),
        age: Some(41),
        monthly_income: Some("0-10000".to_string()),
        number_of_dependent_children: 2,
        number_of_independent_children: 1,
        health_condition: Some("Poor".to_string()),
        disability: Some(Answer::Yes),
        housing_status: Some("Rented".to_string()),
        assistance_needs: items(&["Food", "Medical"]),
        government_schemes: Some(Vec::new()),
        ..BeneficiaryRecord::default()
    }
}

pub(super) fn person(
    gender: Option<Gender>,
    age: Option<i32>,
    marital_status: Option<&str>,
) -> BeneficiaryRecord {
    BeneficiaryRecord {
        gender,
        age,
        marital_status: marital_status.map(str::to_string),
        ..BeneficiaryRecord::default()
    }
}

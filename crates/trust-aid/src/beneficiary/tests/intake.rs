use crate::beneficiary::assessment::compute_assessment_score;
use crate::beneficiary::avatar::{classify_avatar_category, AvatarCategory};
use crate::beneficiary::domain::{Answer, BeneficiaryRecord, Gender, PriorityLevel};
use crate::beneficiary::intake::{BeneficiaryImporter, ImportError, IntakeFormat};
use std::path::Path;

const FORM_POST: &str = r#"{
    "id": 42,
    "name": "Meena",
    "gender": "FEMALE",
    "age": "34",
    "maritalStatus": "Married",
    "monthlyIncome": "0-10000",
    "numberOfDependentChildren": "2",
    "numberOfIndependentChildren": 1,
    "educationExpense": "1200",
    "earningMembers": "one",
    "disability": "yes",
    "healthInsurance": "No",
    "assistanceNeeds": ["Food"],
    "governmentSchemes": null,
    "priorityLevel": "High",
    "spouseName": "ignored"
}"#;

#[test]
fn form_posts_decode_leniently() {
    let record: BeneficiaryRecord = serde_json::from_str(FORM_POST).expect("record decodes");

    assert_eq!(record.id.as_deref(), Some("42"));
    assert_eq!(record.gender, Some(Gender::Female));
    assert_eq!(record.age, Some(34));
    assert_eq!(record.number_of_dependent_children, 2);
    assert_eq!(record.number_of_independent_children, 1);
    assert_eq!(record.education_expense, Some(1200.0));
    assert_eq!(record.earning_members, None);
    assert_eq!(record.disability, Some(Answer::Yes));
    assert_eq!(record.health_insurance, None);
    assert_eq!(record.government_schemes, None);
    assert_eq!(record.priority_level, Some(PriorityLevel::High));
}

#[test]
fn decoded_form_post_scores_and_classifies() {
    let record: BeneficiaryRecord = serde_json::from_str(FORM_POST).expect("record decodes");

    // 25 income + 15 children + 10 education + 10 disability + 5 need + 10 scheme gap.
    assert_eq!(compute_assessment_score(&record).value(), 75);
    assert_eq!(classify_avatar_category(&record), AvatarCategory::FemaleMarried);
}

#[test]
fn malformed_values_fall_back_to_defaults() {
    let record: BeneficiaryRecord = serde_json::from_str(
        r#"{
            "gender": "",
            "age": "unknown",
            "numberOfDependentChildren": -2,
            "numberOfIndependentChildren": 1.5,
            "educationExpense": -300,
            "assistanceNeeds": "Food; Shelter",
            "assets": {"land": true}
        }"#,
    )
    .expect("record decodes");

    assert_eq!(record.gender, None);
    assert_eq!(record.age, None);
    assert_eq!(record.total_children(), 0);
    assert_eq!(record.education_expense, None);
    assert_eq!(record.assistance_need_count(), 2);
    assert_eq!(record.assets, None);
}

#[test]
fn json_batches_import() {
    let json = format!("[{FORM_POST}, {{\"name\": \"Ravi\"}}]");

    let records = BeneficiaryImporter::from_reader(json.as_bytes(), IntakeFormat::Json)
        .expect("batch imports");

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].display_name(), "Ravi");
}

#[test]
fn json_document_must_be_an_array() {
    let err = BeneficiaryImporter::from_reader(FORM_POST.as_bytes(), IntakeFormat::Json)
        .expect_err("single object is rejected");

    assert!(matches!(err, ImportError::Json(_)));
}

#[test]
fn csv_lists_split_on_semicolons() {
    let csv = "id,name,gender,age,monthlyIncome,assistanceNeeds,governmentSchemes,assets,disability\n\
B-7, Kiran ,Male,67,20001-30000,Food;Medical,,Land,yes\n";

    let records =
        BeneficiaryImporter::from_reader(csv.as_bytes(), IntakeFormat::Csv).expect("csv imports");

    let record = &records[0];
    assert_eq!(record.name.as_deref(), Some("Kiran"));
    assert_eq!(record.assistance_need_count(), 2);
    assert_eq!(record.government_schemes, None);
    assert_eq!(record.asset_count(), 1);
    assert_eq!(record.disability, Some(Answer::Yes));
    // 10 income + 10 needs + 10 scheme gap + 10 disability; no deduction at midpoint 25001.
    assert_eq!(compute_assessment_score(record).value(), 40);
    assert_eq!(classify_avatar_category(record), AvatarCategory::MaleSenior);
}

#[test]
fn format_detection_prefers_explicit_choice() {
    let path = Path::new("exports/intake.csv");
    assert_eq!(
        IntakeFormat::detect(path, Some(IntakeFormat::Json), None).expect("explicit"),
        IntakeFormat::Json
    );
    assert_eq!(
        IntakeFormat::detect(path, None, Some(IntakeFormat::Json)).expect("extension"),
        IntakeFormat::Csv
    );
    assert_eq!(
        IntakeFormat::detect(Path::new("intake.txt"), None, Some(IntakeFormat::Json))
            .expect("fallback"),
        IntakeFormat::Json
    );

    let err = IntakeFormat::detect(Path::new("intake.xlsx"), None, None)
        .expect_err("no way to decide");
    assert!(matches!(err, ImportError::UnsupportedFormat { .. }));
}

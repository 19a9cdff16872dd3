use chrono::{NaiveDate, NaiveDateTime};
use formguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

struct JobApplication {
    full_name: String,
    resume: Option<FormFile>,
    cover_letter: Option<FormFile>,
    birth_date: NaiveDateTime,
}

fn full_name(a: &JobApplication) -> FieldValue<'_> {
    FieldValue::Text(&a.full_name)
}

fn resume(a: &JobApplication) -> FieldValue<'_> {
    FieldValue::file(a.resume.as_ref())
}

fn cover_letter(a: &JobApplication) -> FieldValue<'_> {
    FieldValue::file(a.cover_letter.as_ref())
}

fn birth_date(a: &JobApplication) -> FieldValue<'_> {
    FieldValue::DateTime(a.birth_date)
}

impl Describe for JobApplication {
    fn fields() -> &'static [FieldDescriptor<Self>] {
        const FIELDS: &[FieldDescriptor<JobApplication>] = &[
            FieldDescriptor::new("FullName", FieldKind::Text, full_name),
            FieldDescriptor::new("Resume", FieldKind::File, resume),
            FieldDescriptor::new("CoverLetter", FieldKind::File, cover_letter)
                .with_display_name("Cover letter"),
            FieldDescriptor::new("BirthDate", FieldKind::DateTime, birth_date),
        ];
        FIELDS
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap()
}

fn today() -> NaiveDateTime {
    date(2026, 10, 17)
}

fn application() -> JobApplication {
    JobApplication {
        full_name: "Ada Lovelace".into(),
        resume: Some(FormFile::new("cv.pdf", "application/pdf", 52_000)),
        cover_letter: None,
        birth_date: date(1990, 12, 10),
    }
}

fn rule_set() -> RuleSet {
    RuleSet::from_value(json!({
        "rules": [
            { "field": "Resume", "rule": "file_type", "allowed": ["PDF", "DOCX", "PDF"] },
            { "field": "CoverLetter", "rule": "file_type", "allowed": ["TXT"] },
            { "field": "BirthDate", "rule": "min_age", "years": 18 }
        ]
    }))
    .unwrap()
}

#[test]
fn rule_set_accepts_valid_application() {
    let validator = ModelValidator::<JobApplication>::from_rule_set(&rule_set()).unwrap();
    assert_eq!(validator.len(), 3);
    assert!(validator.validate_at(&application(), today()).is_ok());
}

#[test]
fn rule_set_reports_every_failing_field() {
    let validator = ModelValidator::<JobApplication>::from_rule_set(&rule_set()).unwrap();
    let model = JobApplication {
        resume: Some(FormFile::new("cv.png", "image/png", 900)),
        cover_letter: Some(FormFile::new("letter.txt", "text/plain", 0)),
        birth_date: date(2009, 1, 1),
        ..application()
    };

    let errors = validator.validate_at(&model, today()).unwrap_err();
    let summary: Vec<_> = errors
        .errors()
        .iter()
        .map(|e| (e.field.as_deref().unwrap_or_default(), &*e.code))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("Resume", "unsupported_file_type"),
            ("CoverLetter", "empty_file"),
            ("BirthDate", "below_minimum_age"),
        ]
    );
    insta::assert_snapshot!(
        errors.errors()[0].to_string(),
        @"[Resume] unsupported_file_type: Resume should be in PDF,DOCX formats."
    );
}

#[test]
fn display_name_is_used_in_messages() {
    let validator = ModelValidator::<JobApplication>::new()
        .file_types("CoverLetter", FileTypes::new([FileType::Txt, FileType::Pdf]))
        .unwrap();
    let model = JobApplication {
        cover_letter: Some(FormFile::new("letter.doc", "application/msword", 10)),
        ..application()
    };

    let errors = validator.validate_at(&model, today()).unwrap_err();
    assert_eq!(
        errors.errors()[0].message,
        "Cover letter should be in TXT,PDF formats."
    );
    assert_eq!(errors.errors()[0].field.as_deref(), Some("CoverLetter"));
}

#[test]
fn future_birth_date_on_required_field() {
    let validator = ModelValidator::<JobApplication>::new()
        .min_age("BirthDate", MinAge::new(AgeRequirement::years(16)))
        .unwrap();
    let model = JobApplication {
        birth_date: date(2027, 3, 1),
        ..application()
    };

    let errors = validator.validate_at(&model, today()).unwrap_err();
    assert!(errors.errors()[0].is(ErrorCode::FutureDate));
    assert_eq!(
        errors.errors()[0].message,
        "BirthDate can not be greater than today's date"
    );
}

#[test]
fn errors_serialize_for_clients() {
    let validator = ModelValidator::<JobApplication>::new()
        .min_age("BirthDate", MinAge::new(AgeRequirement::new(21, 6, 0)))
        .unwrap();
    let model = JobApplication {
        birth_date: date(2005, 6, 1),
        ..application()
    };

    let errors = validator.validate_at(&model, today()).unwrap_err();
    let value = errors.errors()[0].to_json_value();
    assert_eq!(value["code"], "below_minimum_age");
    assert_eq!(value["field"], "BirthDate");
    assert_eq!(
        value["message"],
        "Minimum age should be at least 21 years 6 months ."
    );
    assert_eq!(value["params"]["months"], "6");
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

#[test]
fn unknown_property_message() {
    let err = ModelValidator::<JobApplication>::new()
        .file_types("Portfolio", FileTypes::new([FileType::Zip]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "The object does not contain the property 'Portfolio'"
    );
}

#[test]
fn incompatible_property_message() {
    let err = ModelValidator::<JobApplication>::new()
        .file_types("FullName", FileTypes::new([FileType::Pdf]))
        .unwrap_err();
    assert_eq!(err.to_string(), "Property 'FullName' must be File type, found Text");

    let err = ModelValidator::<JobApplication>::new()
        .min_age("Resume", MinAge::new(AgeRequirement::years(18)))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Property 'Resume' must be DateTime or Option<DateTime> type, found File"
    );
}

#[test]
fn rule_set_stops_at_first_bad_binding() {
    let rule_set = RuleSet::from_value(json!({
        "rules": [
            { "field": "Resume", "rule": "file_type", "allowed": ["PDF"] },
            { "field": "FullName", "rule": "min_age", "years": 18 },
            { "field": "Nope", "rule": "min_age", "years": 18 }
        ]
    }))
    .unwrap();

    let err = ModelValidator::<JobApplication>::from_rule_set(&rule_set).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::IncompatibleField { ref field, .. } if field == "FullName"
    ));
}

#[test]
fn empty_rule_set_binds_nothing() {
    let validator = ModelValidator::<JobApplication>::from_rule_set(&RuleSet::default()).unwrap();
    assert!(validator.is_empty());
    assert!(validator.validate(&application()).is_ok());
}

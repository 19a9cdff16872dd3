//! Basic usage example for formguard-validator
//!
//! Run with `RUST_LOG=formguard_validator=debug` to see why each check failed.

use chrono::{Local, Months, NaiveDateTime};
use formguard_validator::prelude::*;
use tracing_subscriber::EnvFilter;

struct Registration {
    email: String,
    avatar: Option<FormFile>,
    date_of_birth: Option<NaiveDateTime>,
}

fn email(r: &Registration) -> FieldValue<'_> {
    FieldValue::Text(&r.email)
}

fn avatar(r: &Registration) -> FieldValue<'_> {
    FieldValue::file(r.avatar.as_ref())
}

fn date_of_birth(r: &Registration) -> FieldValue<'_> {
    FieldValue::date_time(r.date_of_birth)
}

impl Describe for Registration {
    fn fields() -> &'static [FieldDescriptor<Self>] {
        const FIELDS: &[FieldDescriptor<Registration>] = &[
            FieldDescriptor::new("Email", FieldKind::Text, email),
            FieldDescriptor::new("Avatar", FieldKind::File, avatar).with_display_name("Avatar image"),
            FieldDescriptor::new("DateOfBirth", FieldKind::OptionalDateTime, date_of_birth),
        ];
        FIELDS
    }
}

const RULES: &str = r#"{
    "rules": [
        { "field": "Avatar", "rule": "file_type", "allowed": ["JPG", "PNG", "WEBP"] },
        { "field": "DateOfBirth", "rule": "min_age", "years": 18 }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Standalone checks
    let upload = FormFile::new("scan.pdf", "application/pdf", 120_000);
    match validate_file_type(Some(&upload), &[FileType::Pdf], "Scan") {
        Ok(()) => println!("✓ scan.pdf accepted"),
        Err(e) => println!("✗ {e}"),
    }

    let blank = FormFile::from_bytes("blank.pdf", "application/pdf", &[]);
    if let Err(e) = validate_file_type(Some(&blank), &[FileType::Pdf], "Scan") {
        println!("✗ blank.pdf: {}", e.message);
    }

    // Rules bound to a model from configuration
    let validator = ModelValidator::<Registration>::from_rule_set(&RuleSet::from_json(RULES)?)?;
    println!("\nBound rules: {validator:?}");

    let now = Local::now().naive_local();
    let teenager = Registration {
        email: "sam@example.com".into(),
        avatar: Some(FormFile::new("me.gif", "image/gif", 4_096)),
        date_of_birth: now.checked_sub_months(Months::new(15 * 12)),
    };

    match validator.validate(&teenager) {
        Ok(()) => println!("✓ registration is valid"),
        Err(errors) => print!("{errors}"),
    }

    // Mistakes in rule setup are reported before any input is seen
    if let Err(e) = ModelValidator::<Registration>::new()
        .min_age("Email", MinAge::new(AgeRequirement::years(18)))
    {
        println!("\nConfiguration error: {e}");
    }

    Ok(())
}

use chrono::{Days, Local, Months, NaiveDate, NaiveDateTime, TimeDelta};
use formguard_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 17)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap()
}

/// `now` minus the requirement, subtracting days, then months, then years.
fn ago(now: NaiveDateTime, years: u32, months: u32, days: u32) -> NaiveDateTime {
    now.checked_sub_days(Days::new(u64::from(days)))
        .and_then(|d| d.checked_sub_months(Months::new(months)))
        .and_then(|d| d.checked_sub_months(Months::new(years * 12)))
        .unwrap()
}

#[rstest]
#[case(18, 0, 0)]
#[case(0, 6, 0)]
#[case(0, 0, 45)]
#[case(5, 3, 12)]
#[case(21, 11, 30)]
fn calendar_offset_passes(#[case] years: u32, #[case] months: u32, #[case] days: u32) {
    let rule = MinAge::new(AgeRequirement::new(years, months, days));
    let born = ago(now(), years, months, days);
    assert!(rule.validate_at(Some(born), now()).is_ok());
}

#[rstest]
#[case(AgeRequirement::new(0, 1, 0), 31)]
#[case(AgeRequirement::new(0, 2, 0), 59)]
#[case(AgeRequirement::new(1, 0, 0), 365)]
#[case(AgeRequirement::new(4, 0, 0), 1461)]
#[case(AgeRequirement::new(0, 3, 10), 100)]
fn requirement_is_a_fixed_span(#[case] requirement: AgeRequirement, #[case] days: i64) {
    let rule = MinAge::new(requirement);
    let span = TimeDelta::days(days);

    assert!(rule.validate_at(Some(now() - span), now()).is_ok());
    let err = rule
        .validate_at(Some(now() - span + TimeDelta::seconds(1)), now())
        .unwrap_err();
    assert!(err.is(ErrorCode::BelowMinimumAge));
}

#[test]
fn february_is_shorter_than_one_month() {
    let rule = MinAge::new(AgeRequirement::new(0, 1, 0));
    let born = NaiveDate::from_ymd_opt(2026, 2, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let first_of_march = born + TimeDelta::days(28);

    assert!(rule.validate_at(Some(born), first_of_march).is_err());
    assert!(rule
        .validate_at(Some(born), first_of_march + TimeDelta::days(3))
        .is_ok());
}

#[rstest]
#[case(AgeRequirement::new(18, 0, 0), "Minimum age should be at least 18 years  .")]
#[case(AgeRequirement::new(5, 0, 3), "Minimum age should be at least 5 years  3 days.")]
#[case(AgeRequirement::new(0, 2, 0), "Minimum age should be at least  2 months .")]
#[case(AgeRequirement::new(1, 2, 3), "Minimum age should be at least 1 years 2 months 3 days.")]
fn below_requirement_message(#[case] requirement: AgeRequirement, #[case] expected: &str) {
    let rule = MinAge::new(requirement);
    let err = rule.validate_at(Some(now()), now()).unwrap_err();
    assert!(err.is(ErrorCode::BelowMinimumAge));
    assert_eq!(err.message, expected);
}

#[test]
fn seventeen_years_eleven_months_is_not_eighteen() {
    let rule = MinAge::new(AgeRequirement::years(18)).with_field_name("DateOfBirth");
    let err = rule
        .validate_at(Some(ago(now(), 17, 11, 0)), now())
        .unwrap_err();
    assert_eq!(err.message, "Minimum age should be at least 18 years  .");
    assert_eq!(err.field.as_deref(), Some("DateOfBirth"));
}

#[test]
fn one_second_in_the_future_fails() {
    let rule = MinAge::new(AgeRequirement::years(18)).with_field_name("DateOfBirth");
    let later = now() + TimeDelta::seconds(1);
    let err = rule.validate_at(Some(later), now()).unwrap_err();
    assert!(err.is(ErrorCode::FutureDate));
    assert_eq!(
        err.message,
        "DateOfBirth can not be greater than today's date"
    );
}

#[test]
fn local_clock() {
    let today = Local::now().naive_local();
    let rule = MinAge::new(AgeRequirement::years(18));

    assert!(rule.validate(&Some(ago(today, 18, 0, 0))).is_ok());
    assert!(rule.validate(&Some(ago(today, 17, 11, 0))).is_err());
    assert!(rule.validate(&None).is_ok());
}

#[test]
fn optional_wrapper_over_plain_dates() {
    // A required field wrapped with `optional` treats absence as success
    struct Born(MinAge);

    impl Validate for Born {
        type Input = NaiveDateTime;

        fn validate(&self, input: &NaiveDateTime) -> Result<(), ValidationError> {
            self.0.validate_at(Some(*input), now())
        }
    }

    let rule = Born(MinAge::new(AgeRequirement::years(16))).optional();
    assert!(rule.validate(&None).is_ok());
    assert!(rule.validate(&Some(ago(now(), 16, 0, 0))).is_ok());
    assert!(rule.validate(&Some(ago(now(), 15, 0, 0))).is_err());
}

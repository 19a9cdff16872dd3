//! Minimum age validator for date-of-birth fields.
//!
//! Both sides of the comparison are laid out from the same base date,
//! 0001-01-01T00:00. The elapsed time `now - date_of_birth` is added to the
//! base, and so is the requirement (years, then months, then days, in calendar
//! steps). The check passes when the elapsed side is not earlier than the
//! requirement side.
//!
//! A requirement therefore stands for a fixed span: one month is the 31 days
//! of January in year 1, one year is 365 days, and 18 years are 6574 days
//! because years 4, 8, 12 and 16 are leap years. Someone born exactly 18
//! calendar years ago has lived through at least four 29ths of February and
//! passes.

use std::borrow::Cow;
use std::fmt;

use chrono::{Days, Local, Months, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::foundation::{ErrorCode, Validate, ValidationError};

// ============================================================================
// AGE REQUIREMENT
// ============================================================================

/// Minimum elapsed calendar time.
///
/// Months are conventionally `0..=11` and days `0..=31`, but larger values
/// are accepted and simply roll over. A requirement with every component at
/// zero is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeRequirement {
    #[serde(default)]
    pub years: u32,
    #[serde(default)]
    pub months: u32,
    #[serde(default)]
    pub days: u32,
}

impl AgeRequirement {
    /// Creates a requirement from its three components.
    #[must_use]
    pub const fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Whole years only.
    #[must_use]
    pub const fn years(years: u32) -> Self {
        Self::new(years, 0, 0)
    }

    /// True when no component is positive.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Length of the requirement measured from 0001-01-01, or `None` if it
    /// runs past the representable range.
    #[must_use]
    pub fn span(&self) -> Option<TimeDelta> {
        let base = base_date()?;
        let threshold = base
            .checked_add_months(Months::new(self.years.checked_mul(12)?))?
            .checked_add_months(Months::new(self.months))?
            .checked_add_days(Days::new(u64::from(self.days)))?;
        Some(threshold.signed_duration_since(base))
    }

    /// True if, at `now`, at least [`span`](Self::span) has elapsed since
    /// `date_of_birth`. The boundary is inclusive. A requirement that does
    /// not fit the calendar is never met.
    #[must_use]
    pub fn is_met(&self, date_of_birth: NaiveDateTime, now: NaiveDateTime) -> bool {
        self.is_noop()
            || self
                .span()
                .is_some_and(|span| now.signed_duration_since(date_of_birth) >= span)
    }

    /// Default failure message.
    ///
    /// Each component is rendered only when positive but keeps its slot, so
    /// missing components leave their separating space behind:
    /// `(18, 0, 0)` gives `Minimum age should be at least 18 years  .`.
    #[must_use]
    pub fn message(&self) -> String {
        let part = |value: u32, unit: &str| {
            if value > 0 {
                format!("{value} {unit}")
            } else {
                String::new()
            }
        };

        format!(
            "Minimum age should be at least {} {} {}.",
            part(self.years, "years"),
            part(self.months, "months"),
            part(self.days, "days")
        )
    }
}

fn base_date() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1, 1, 1).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Lists the positive components, e.g. `5 years 3 days`.
impl fmt::Display for AgeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (self.years, "years"),
            (self.months, "months"),
            (self.days, "days"),
        ];

        let mut first = true;
        for (value, unit) in parts {
            if value == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{value} {unit}")?;
            first = false;
        }
        Ok(())
    }
}

// ============================================================================
// MIN AGE VALIDATOR
// ============================================================================

/// Validates that an optional date of birth is in the past and old enough.
///
/// `None` always passes. The clock is the local wall time; use
/// [`MinAge::validate_at`] to evaluate against a fixed moment.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use formguard_validator::validators::{AgeRequirement, MinAge};
///
/// let rule = MinAge::new(AgeRequirement::years(18)).with_field_name("DateOfBirth");
/// let now = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(12, 0, 0).unwrap();
///
/// let adult = NaiveDate::from_ymd_opt(2008, 10, 17).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert!(rule.validate_at(Some(adult), now).is_ok());
///
/// let minor = NaiveDate::from_ymd_opt(2008, 11, 17).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let err = rule.validate_at(Some(minor), now).unwrap_err();
/// assert_eq!(err.message, "Minimum age should be at least 18 years  .");
/// ```
#[derive(Debug, Clone)]
pub struct MinAge {
    requirement: AgeRequirement,
    field_name: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
}

impl MinAge {
    /// Creates a validator for the given requirement.
    #[must_use]
    pub fn new(requirement: AgeRequirement) -> Self {
        Self {
            requirement,
            field_name: Cow::Borrowed("DateOfBirth"),
            message: None,
        }
    }

    /// Sets the field name used in messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field_name(mut self, field_name: impl Into<Cow<'static, str>>) -> Self {
        self.field_name = field_name.into();
        self
    }

    /// Overrides the below-minimum-age message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the configured requirement.
    #[must_use]
    pub fn requirement(&self) -> AgeRequirement {
        self.requirement
    }

    /// Returns the field name used in messages.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Validates against an explicit "now".
    pub fn validate_at(
        &self,
        date_of_birth: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Result<(), ValidationError> {
        let Some(date_of_birth) = date_of_birth else {
            return Ok(());
        };

        if date_of_birth > now {
            tracing::debug!(field = %self.field_name, %date_of_birth, "date of birth lies in the future");
            return Err(ValidationError::new(
                ErrorCode::FutureDate,
                format!("{} can not be greater than today's date", self.field_name),
            )
            .with_field(self.field_name.clone()));
        }

        if self.requirement.is_met(date_of_birth, now) {
            return Ok(());
        }

        tracing::debug!(
            field = %self.field_name,
            %date_of_birth,
            requirement = %self.requirement,
            "minimum age not reached"
        );

        let message = match &self.message {
            Some(message) => message.clone(),
            None => Cow::Owned(self.requirement.message()),
        };

        Err(ValidationError::new(ErrorCode::BelowMinimumAge, message)
            .with_field(self.field_name.clone())
            .with_param("years", self.requirement.years.to_string())
            .with_param("months", self.requirement.months.to_string())
            .with_param("days", self.requirement.days.to_string()))
    }
}

impl Validate for MinAge {
    type Input = Option<NaiveDateTime>;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.validate_at(*input, Local::now().naive_local())
    }
}

/// Checks an optional date of birth against a requirement using the local clock.
pub fn validate_min_age(
    date_of_birth: Option<NaiveDateTime>,
    requirement: AgeRequirement,
    field_name: &str,
) -> Result<(), ValidationError> {
    MinAge::new(requirement)
        .with_field_name(field_name.to_owned())
        .validate(&date_of_birth)
}

// ============================================================================
// TESTS
// ============================================================================

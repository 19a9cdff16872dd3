//! Error types for validation failures
//!
//! Two families live here:
//!
//! - [`ValidationError`] / [`ValidationErrors`]: ordinary failures returned as
//!   values and shown to the end user next to the offending field.
//! - [`ConfigurationError`]: a rule was attached to a field that does not
//!   exist or has the wrong declared kind. This is an integration bug and is
//!   surfaced when the rule is bound, never during validation.
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so the
//! static codes and fixed messages never allocate.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::field::FieldKind;

// ============================================================================
// ERROR CODES
// ============================================================================

/// Stable machine-readable codes for every failure this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The uploaded file has zero length.
    EmptyFile,
    /// The declared content type is not in the allowed set.
    UnsupportedFileType,
    /// A date-of-birth lies after the current moment.
    FutureDate,
    /// Not enough time has elapsed since the date.
    BelowMinimumAge,
    /// A field getter returned a value of a kind other than the one its
    /// descriptor declares. Reported instead of skipping the rule.
    FieldKindMismatch,
}

impl ErrorCode {
    /// Returns the wire form of the code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyFile => "empty_file",
            Self::UnsupportedFileType => "unsupported_file_type",
            Self::FutureDate => "future_date",
            Self::BelowMinimumAge => "below_minimum_age",
            Self::FieldKindMismatch => "field_kind_mismatch",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for Cow<'static, str> {
    fn from(code: ErrorCode) -> Self {
        Cow::Borrowed(code.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```rust
/// use formguard_validator::foundation::{ErrorCode, ValidationError};
///
/// let error = ValidationError::new(ErrorCode::EmptyFile, "Selected file is empty.")
///     .with_field("Photo");
///
/// assert!(error.is(ErrorCode::EmptyFile));
/// assert_eq!(error.field.as_deref(), Some("Photo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    pub code: Cow<'static, str>,

    /// Human-readable message, shown verbatim by the host.
    pub message: Cow<'static, str>,

    /// Name of the field that failed, once known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Errors this one replaced or wraps.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error carries the given code.
    #[must_use]
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code.as_str()
    }

    /// Converts the error to a JSON structure for hosts that ship errors to a client.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every failure produced by one pass over a model, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors reported against one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// A rule could not be attached to its target.
///
/// Returned by the binding step (see [`crate::rules::ModelValidator`]); a host
/// should treat it as a bug in its rule setup and abort.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The model has no field with this name.
    #[error("The object does not contain the property '{field}'")]
    UnknownField {
        /// Requested field name.
        field: String,
    },

    /// The field exists but its declared kind cannot carry this rule.
    #[error("Property '{field}' must be {expected} type, found {actual}")]
    IncompatibleField {
        /// Field name.
        field: String,
        /// Human-readable list of accepted kinds.
        expected: &'static str,
        /// Declared kind of the field.
        actual: FieldKind,
    },

    /// A rule set document could not be read.
    #[error("invalid rule set: {0}")]
    InvalidRuleSet(String),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidRuleSet(error.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

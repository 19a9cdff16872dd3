//! Binding rules to model fields
//!
//! A [`ModelValidator`] attaches rules to named fields of a [`Describe`] type.
//! Binding looks the field up and checks its declared kind, so a rule on a
//! missing or incompatible field fails immediately with a
//! [`ConfigurationError`] instead of surfacing later as a validation failure.
//!
//! Rules can also come from configuration. A [`RuleSet`] is a serde document:
//!
//! ```json
//! {
//!   "rules": [
//!     { "field": "Photo", "rule": "file_type", "allowed": ["JPG", "PNG"] },
//!     { "field": "DateOfBirth", "rule": "min_age", "years": 18 }
//!   ]
//! }
//! ```

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::foundation::{
    ConfigurationError, Describe, ErrorCode, FieldDescriptor, FieldKind, FieldValue,
    ValidationError, ValidationErrors,
};
use crate::validators::{AgeRequirement, AllowedFileTypes, FileTypes, MinAge};

// ============================================================================
// RULE CONFIGURATION
// ============================================================================

/// One rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    /// Restrict uploads to a set of file type categories.
    FileType {
        allowed: AllowedFileTypes,
        /// Template override, `{0}` = display name, `{1}` = category names.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Require a minimum age on a date of birth.
    MinAge {
        #[serde(default)]
        years: u32,
        #[serde(default)]
        months: u32,
        #[serde(default)]
        days: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl RuleConfig {
    /// Builds the validator described by this entry.
    pub fn build(&self) -> Rule {
        match self {
            Self::FileType { allowed, message } => {
                let mut rule = FileTypes::new(allowed.iter());
                if let Some(message) = message {
                    rule = rule.with_template(message.clone());
                }
                Rule::FileTypes(rule)
            }
            Self::MinAge {
                years,
                months,
                days,
                message,
            } => {
                let mut rule = MinAge::new(AgeRequirement::new(*years, *months, *days));
                if let Some(message) = message {
                    rule = rule.with_error_message(message.clone());
                }
                Rule::MinAge(rule)
            }
        }
    }
}

/// A rule attached to a field by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: String,
    #[serde(flatten)]
    pub rule: RuleConfig,
}

/// An ordered list of field rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

impl RuleSet {
    /// Parses a rule set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a rule set from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_value(value)?)
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A validator that can be bound to a model field.
#[derive(Debug, Clone)]
pub enum Rule {
    FileTypes(FileTypes),
    MinAge(MinAge),
}

impl Rule {
    fn expected_kind(&self) -> &'static str {
        match self {
            Self::FileTypes(_) => "File",
            Self::MinAge(_) => "DateTime or Option<DateTime>",
        }
    }

    fn accepts_kind(&self, kind: FieldKind) -> bool {
        match self {
            Self::FileTypes(_) => kind == FieldKind::File,
            Self::MinAge(_) => kind.is_date_time(),
        }
    }

    /// Re-labels the rule after the field it is bound to.
    fn labelled<T>(self, descriptor: &FieldDescriptor<T>) -> Self {
        match self {
            Self::FileTypes(rule) => {
                Self::FileTypes(rule.with_display_name(descriptor.display_name()))
            }
            Self::MinAge(rule) => Self::MinAge(rule.with_field_name(descriptor.name())),
        }
    }

    fn apply<T>(
        &self,
        descriptor: &FieldDescriptor<T>,
        model: &T,
        now: NaiveDateTime,
    ) -> Result<(), ValidationError> {
        match (self, descriptor.value(model)) {
            (Self::FileTypes(rule), FieldValue::Null) => rule.check(None),
            (Self::FileTypes(rule), FieldValue::File(file)) => rule.check(Some(file)),
            (Self::MinAge(rule), FieldValue::Null) => rule.validate_at(None, now),
            (Self::MinAge(rule), FieldValue::DateTime(date)) => rule.validate_at(Some(date), now),
            (rule, value) => {
                tracing::error!(
                    field = descriptor.name(),
                    declared = %descriptor.kind(),
                    expected = rule.expected_kind(),
                    ?value,
                    "field getter returned a value of an undeclared kind"
                );
                Err(ValidationError::new(
                    ErrorCode::FieldKindMismatch,
                    format!(
                        "Property '{}' is declared as {} but its getter returned {}",
                        descriptor.name(),
                        descriptor.kind(),
                        value.kind_name()
                    ),
                )
                .with_param("declared", descriptor.kind().to_string())
                .with_param("actual", value.kind_name()))
            }
        }
    }
}

impl From<FileTypes> for Rule {
    fn from(rule: FileTypes) -> Self {
        Self::FileTypes(rule)
    }
}

impl From<MinAge> for Rule {
    fn from(rule: MinAge) -> Self {
        Self::MinAge(rule)
    }
}

// ============================================================================
// MODEL VALIDATOR
// ============================================================================

struct Binding<T: 'static> {
    descriptor: &'static FieldDescriptor<T>,
    rule: Rule,
}

/// Rules bound to the fields of `T`.
///
/// # Examples
///
/// ```rust
/// use formguard_validator::prelude::*;
///
/// struct Application {
///     resume: Option<FormFile>,
/// }
///
/// fn resume(model: &Application) -> FieldValue<'_> {
///     FieldValue::file(model.resume.as_ref())
/// }
///
/// impl Describe for Application {
///     fn fields() -> &'static [FieldDescriptor<Self>] {
///         const FIELDS: &[FieldDescriptor<Application>] =
///             &[FieldDescriptor::new("Resume", FieldKind::File, resume)];
///         FIELDS
///     }
/// }
///
/// let validator = ModelValidator::<Application>::new()
///     .file_types("Resume", FileTypes::new([FileType::Pdf]))
///     .unwrap();
///
/// let model = Application {
///     resume: Some(FormFile::new("cv.png", "image/png", 100)),
/// };
/// let errors = validator.validate(&model).unwrap_err();
/// assert_eq!(errors.errors()[0].message, "Resume should be in PDF format.");
///
/// // Binding to a field that does not exist is a configuration error
/// assert!(ModelValidator::<Application>::new()
///     .file_types("Photo", FileTypes::new([FileType::Png]))
///     .is_err());
/// ```
pub struct ModelValidator<T: 'static> {
    bindings: Vec<Binding<T>>,
}

impl<T: Describe> ModelValidator<T> {
    /// Creates a validator with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Binds `rule` to the field called `field`.
    pub fn rule(mut self, field: &str, rule: impl Into<Rule>) -> Result<Self, ConfigurationError> {
        let rule = rule.into();
        let descriptor = T::field(field).inspect_err(|error| {
            tracing::warn!(model = std::any::type_name::<T>(), %error, "rule binding failed");
        })?;

        if !rule.accepts_kind(descriptor.kind()) {
            let error = ConfigurationError::IncompatibleField {
                field: field.to_owned(),
                expected: rule.expected_kind(),
                actual: descriptor.kind(),
            };
            tracing::warn!(model = std::any::type_name::<T>(), %error, "rule binding failed");
            return Err(error);
        }

        self.bindings.push(Binding {
            descriptor,
            rule: rule.labelled(descriptor),
        });
        Ok(self)
    }

    /// Binds a file type rule.
    pub fn file_types(self, field: &str, rule: FileTypes) -> Result<Self, ConfigurationError> {
        self.rule(field, rule)
    }

    /// Binds a minimum age rule.
    pub fn min_age(self, field: &str, rule: MinAge) -> Result<Self, ConfigurationError> {
        self.rule(field, rule)
    }

    /// Binds every entry of a rule set, stopping at the first bad one.
    pub fn from_rule_set(rule_set: &RuleSet) -> Result<Self, ConfigurationError> {
        rule_set
            .rules
            .iter()
            .try_fold(Self::new(), |validator, entry| {
                validator.rule(&entry.field, entry.rule.build())
            })
    }

    /// Number of bound rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if no rule is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Runs every rule against `model` using the local clock.
    pub fn validate(&self, model: &T) -> Result<(), ValidationErrors> {
        self.validate_at(model, Local::now().naive_local())
    }

    /// Runs every rule against `model` with an explicit "now".
    ///
    /// All failures are collected, each tagged with its field name.
    pub fn validate_at(&self, model: &T, now: NaiveDateTime) -> Result<(), ValidationErrors> {
        let errors: ValidationErrors = self
            .bindings
            .iter()
            .filter_map(|binding| {
                binding
                    .rule
                    .apply(binding.descriptor, model, now)
                    .err()
                    .map(|error| error.with_field(binding.descriptor.name()))
            })
            .collect();

        tracing::debug!(
            model = std::any::type_name::<T>(),
            rules = self.bindings.len(),
            failures = errors.len(),
            "model validated"
        );

        errors.into_result(())
    }
}

impl<T: Describe> Default for ModelValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> std::fmt::Debug for ModelValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.bindings
                    .iter()
                    .map(|binding| (binding.descriptor.name(), &binding.rule)),
            )
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `ValidationErrors`, `ConfigurationError`
//! - **Field access**: `Describe`, `FieldDescriptor`, `FieldKind`, `FieldValue`
//!
//! # Error families
//!
//! Ordinary failures (empty file, wrong content type, date in the future,
//! age below the minimum) are returned as [`ValidationError`] values and are
//! meant for the end user. Attaching a rule to a field that does not exist, or
//! whose declared kind cannot carry the rule, yields a [`ConfigurationError`]
//! at bind time instead.

pub mod error;
pub mod field;
pub mod traits;

pub use error::{ConfigurationError, ErrorCode, ValidationError, ValidationErrors};
pub use field::{Describe, FieldDescriptor, FieldKind, FieldValue};
pub use traits::{Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with a single validator.
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate,
{
    validator.validate(value)
}

/// Validates a value with multiple validators, collecting every failure.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        if let Err(e) = validator.validate(value) {
            errors.add(e);
        }
    }

    errors.into_result(())
}

// ============================================================================
// TESTS
// ============================================================================

//! Prelude module for convenient imports.
//!
//! Provides a single `use formguard_validator::prelude::*;` import that brings
//! in the traits, validators, field descriptors and the model binder.

// ============================================================================
// FOUNDATION: Core traits, errors, field access
// ============================================================================

pub use crate::foundation::{
    ConfigurationError, Describe, ErrorCode, FieldDescriptor, FieldKind, FieldValue, Validate,
    ValidateExt, ValidationError, ValidationErrors,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::{
    AgeRequirement, AllowedFileTypes, FileType, FileTypes, FormFile, MinAge, UploadedFile,
    validate_file_type, validate_min_age,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Optional, WithMessage, optional, with_message};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rules::{FieldRule, ModelValidator, Rule, RuleConfig, RuleSet};

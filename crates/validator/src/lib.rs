//! # formguard-validator
//!
//! Validation rules for form models: file-type checks on uploads and
//! minimum-age checks on date-of-birth fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use formguard_validator::prelude::*;
//!
//! let upload = FormFile::new("cv.pdf", "application/pdf", 4096);
//! let rule = FileTypes::new([FileType::Pdf, FileType::Docx]).with_display_name("Resume");
//! assert!(rule.validate(&upload).is_ok());
//!
//! let adult = MinAge::new(AgeRequirement::years(18));
//! assert!(adult.validate(&None).is_ok());
//! ```
//!
//! ## Binding rules to a model
//!
//! Implement [`Describe`](foundation::Describe) for the model and bind rules
//! by field name with [`ModelValidator`](rules::ModelValidator). Binding
//! checks that the field exists and has a compatible declared kind, so setup
//! mistakes surface as a [`ConfigurationError`](foundation::ConfigurationError)
//! before any input is validated. Rules may also be loaded from a JSON
//! [`RuleSet`](rules::RuleSet).
//!
//! ## Built-in Validators
//!
//! - **Upload**: [`FileTypes`](validators::FileTypes)
//! - **Date**: [`MinAge`](validators::MinAge)

// ValidationError is returned by value from every validator.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod validators;

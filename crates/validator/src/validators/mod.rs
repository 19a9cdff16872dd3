//! Built-in validators
//!
//! # Categories
//!
//! - **Upload**: [`FileTypes`] checks that an upload is non-empty and of an
//!   allowed [`FileType`]
//! - **Date**: [`MinAge`] checks that a date of birth is in the past and at
//!   least [`AgeRequirement`] ago
//!
//! Each validator also has a plain function form ([`validate_file_type`],
//! [`validate_min_age`]) for one-off checks.

pub mod file_type;
pub mod min_age;
pub mod upload;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use file_type::{
    AllowedFileTypes, EMPTY_FILE_MESSAGE, FileType, FileTypes, MULTIPLE_TYPES_TEMPLATE,
    SINGLE_TYPE_TEMPLATE, validate_file_type,
};
pub use min_age::{AgeRequirement, MinAge, validate_min_age};
pub use upload::{FormFile, UploadedFile};

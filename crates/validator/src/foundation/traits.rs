//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// This trait is generic over the input type, allowing for compile-time
/// type safety while maintaining flexibility. All validators return
/// `Result<(), ValidationError>` for a consistent API.
///
/// Validators hold only immutable configuration, so a single instance may be
/// shared across threads and called concurrently.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for trait objects)
///
/// # Examples
///
/// ```rust
/// use formguard_validator::foundation::{Validate, ValidationError};
///
/// struct NonZeroLength;
///
/// impl Validate for NonZeroLength {
///     type Input = [u8];
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::new("empty", "must not be empty"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZeroLength.validate(b"abc").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
pub trait ValidateExt: Validate + Sized {
    /// Makes a validator optional.
    ///
    /// The validator succeeds if the input is `None` or if validation passes.
    fn optional(self) -> Optional<Self>
    where
        Self::Input: Sized,
    {
        Optional::new(self)
    }

    /// Replaces the failure message, keeping the original error as nested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use formguard_validator::prelude::*;
    ///
    /// let rule = FileTypes::new([FileType::Pdf]).with_message("Upload your CV as a PDF");
    /// let file = FormFile::new("cv.png", "image/png", 12);
    ///
    /// let err = rule.validate(&file).unwrap_err();
    /// assert_eq!(err.message, "Upload your CV as a PDF");
    /// ```
    fn with_message(self, message: impl Into<String>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::message::WithMessage;
pub use crate::combinators::optional::Optional;

// ============================================================================
// TESTS
// ============================================================================

//! Named field access without runtime reflection
//!
//! A model type lists its fields once, as a static table of
//! [`FieldDescriptor`]s. Each descriptor carries the field's declared
//! [`FieldKind`] and a plain `fn` getter returning a borrowed [`FieldValue`].
//! Rules look fields up by name through [`Describe::field`] and check the
//! declared kind before they are allowed to run.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDateTime;
//! use formguard_validator::foundation::{Describe, FieldDescriptor, FieldKind, FieldValue};
//!
//! struct Signup {
//!     date_of_birth: Option<NaiveDateTime>,
//! }
//!
//! fn date_of_birth(model: &Signup) -> FieldValue<'_> {
//!     FieldValue::date_time(model.date_of_birth)
//! }
//!
//! impl Describe for Signup {
//!     fn fields() -> &'static [FieldDescriptor<Self>] {
//!         const FIELDS: &[FieldDescriptor<Signup>] = &[FieldDescriptor::new(
//!             "DateOfBirth",
//!             FieldKind::OptionalDateTime,
//!             date_of_birth,
//!         )];
//!         FIELDS
//!     }
//! }
//!
//! assert!(Signup::field("DateOfBirth").is_ok());
//! assert!(Signup::field("Birthday").is_err());
//! ```

use std::fmt;

use chrono::NaiveDateTime;

use crate::foundation::ConfigurationError;
use crate::validators::upload::UploadedFile;

// ============================================================================
// FIELD KIND
// ============================================================================

/// Declared type of a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A date and time that is always present.
    DateTime,
    /// A date and time that may be absent.
    OptionalDateTime,
    /// An uploaded file (may be absent).
    File,
    /// Free text.
    Text,
    /// Whole number.
    Integer,
    /// Flag.
    Boolean,
}

impl FieldKind {
    /// True for both date-time kinds.
    #[must_use]
    pub const fn is_date_time(self) -> bool {
        matches!(self, Self::DateTime | Self::OptionalDateTime)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::DateTime => "DateTime",
            Self::OptionalDateTime => "Option<DateTime>",
            Self::File => "File",
            Self::Text => "Text",
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
        })
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Runtime value of a field, borrowed from the model instance.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    /// No value.
    Null,
    /// A date and time.
    DateTime(NaiveDateTime),
    /// An uploaded file.
    File(&'a dyn UploadedFile),
    /// Text.
    Text(&'a str),
    /// Whole number.
    Integer(i64),
    /// Flag.
    Boolean(bool),
}

impl<'a> FieldValue<'a> {
    /// Wraps an optional date, mapping `None` to [`FieldValue::Null`].
    #[must_use]
    pub fn date_time(value: Option<NaiveDateTime>) -> Self {
        value.map_or(Self::Null, Self::DateTime)
    }

    /// Wraps an optional file, mapping `None` to [`FieldValue::Null`].
    #[must_use]
    pub fn file<F: UploadedFile>(value: Option<&'a F>) -> Self {
        match value {
            Some(file) => Self::File(file),
            None => Self::Null,
        }
    }

    /// Kind name of the carried value, `Null` for no value.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::DateTime(_) => "DateTime",
            Self::File(_) => "File",
            Self::Text(_) => "Text",
            Self::Integer(_) => "Integer",
            Self::Boolean(_) => "Boolean",
        }
    }

    /// Returns true for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::DateTime(value) => f.debug_tuple("DateTime").field(value).finish(),
            Self::File(file) => f
                .debug_struct("File")
                .field("len", &file.len())
                .field("content_type", &file.content_type())
                .finish(),
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            Self::Boolean(value) => f.debug_tuple("Boolean").field(value).finish(),
        }
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Name, declared kind and accessor of one field of `T`.
pub struct FieldDescriptor<T> {
    name: &'static str,
    display_name: &'static str,
    kind: FieldKind,
    getter: fn(&T) -> FieldValue<'_>,
}

impl<T> FieldDescriptor<T> {
    /// Creates a descriptor whose display name equals its name.
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind, getter: fn(&T) -> FieldValue<'_>) -> Self {
        Self {
            name,
            display_name: name,
            kind,
            getter,
        }
    }

    /// Sets the label shown to end users.
    #[must_use]
    pub const fn with_display_name(mut self, display_name: &'static str) -> Self {
        self.display_name = display_name;
        self
    }

    /// Returns the field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the user-facing label.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Returns the declared kind.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Reads the field from an instance.
    pub fn value<'a>(&self, instance: &'a T) -> FieldValue<'a> {
        (self.getter)(instance)
    }
}

// Manual impls - fn pointers are Copy regardless of T
impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("kind", &self.kind)
            .field("getter", &"<function>")
            .finish()
    }
}

// ============================================================================
// DESCRIBE TRAIT
// ============================================================================

/// Types whose fields can be looked up by name.
pub trait Describe: Sized + 'static {
    /// All fields of the type, in declaration order.
    fn fields() -> &'static [FieldDescriptor<Self>];

    /// Finds a field by name.
    fn field(name: &str) -> Result<&'static FieldDescriptor<Self>, ConfigurationError> {
        Self::fields()
            .iter()
            .find(|descriptor| descriptor.name == name)
            .ok_or_else(|| ConfigurationError::UnknownField {
                field: name.to_owned(),
            })
    }
}

// ============================================================================
// TESTS
// ============================================================================

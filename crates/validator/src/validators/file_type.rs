//! File type validator for uploaded files.
//!
//! Checks that an upload is non-empty and that its declared content type is
//! one of the MIME types registered for the allowed [`FileType`] categories.
//! Comparison is case-insensitive.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::foundation::{ErrorCode, Validate, ValidationError};
use crate::validators::upload::UploadedFile;

/// Message template used when exactly one category is allowed.
pub const SINGLE_TYPE_TEMPLATE: &str = "{0} should be in {1} format.";

/// Message template used when several categories are allowed.
pub const MULTIPLE_TYPES_TEMPLATE: &str = "{0} should be in {1} formats.";

/// Message returned for zero-length uploads.
pub const EMPTY_FILE_MESSAGE: &str = "Selected file is empty.";

// ============================================================================
// FILE TYPE
// ============================================================================

/// Logical file type category.
///
/// Serialized and displayed by its upper-case name (`PDF`, `DOCX`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Jpg,
    Jpeg,
    Png,
    Gif,
    Bmp,
    Svg,
    Webp,
    Txt,
    Csv,
    Rtf,
    Pdf,
    Doc,
    Docx,
    Xls,
    Xlsx,
    Ppt,
    Pptx,
    Zip,
    Xml,
    Json,
    Mp3,
    Mp4,
}

impl FileType {
    /// Every category, in declaration order.
    pub const ALL: [Self; 22] = [
        Self::Jpg,
        Self::Jpeg,
        Self::Png,
        Self::Gif,
        Self::Bmp,
        Self::Svg,
        Self::Webp,
        Self::Txt,
        Self::Csv,
        Self::Rtf,
        Self::Pdf,
        Self::Doc,
        Self::Docx,
        Self::Xls,
        Self::Xlsx,
        Self::Ppt,
        Self::Pptx,
        Self::Zip,
        Self::Xml,
        Self::Json,
        Self::Mp3,
        Self::Mp4,
    ];

    /// Returns the category name used in messages and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpg => "JPG",
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Svg => "SVG",
            Self::Webp => "WEBP",
            Self::Txt => "TXT",
            Self::Csv => "CSV",
            Self::Rtf => "RTF",
            Self::Pdf => "PDF",
            Self::Doc => "DOC",
            Self::Docx => "DOCX",
            Self::Xls => "XLS",
            Self::Xlsx => "XLSX",
            Self::Ppt => "PPT",
            Self::Pptx => "PPTX",
            Self::Zip => "ZIP",
            Self::Xml => "XML",
            Self::Json => "JSON",
            Self::Mp3 => "MP3",
            Self::Mp4 => "MP4",
        }
    }

    /// MIME types accepted for this category. Some categories have several
    /// equivalent spellings.
    #[must_use]
    pub const fn mime_types(self) -> &'static [&'static str] {
        match self {
            Self::Jpg => &["image/jpeg"],
            Self::Jpeg => &["image/jpeg", "image/pjpeg"],
            Self::Png => &["image/png"],
            Self::Gif => &["image/gif"],
            Self::Bmp => &["image/bmp"],
            Self::Svg => &["image/svg+xml"],
            Self::Webp => &["image/webp"],
            Self::Txt => &["text/plain"],
            Self::Csv => &["text/csv"],
            Self::Rtf => &["application/rtf", "text/rtf"],
            Self::Pdf => &["application/pdf"],
            Self::Doc => &["application/msword"],
            Self::Docx => {
                &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"]
            }
            Self::Xls => &["application/vnd.ms-excel"],
            Self::Xlsx => &["application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"],
            Self::Ppt => &["application/vnd.ms-powerpoint"],
            Self::Pptx => {
                &["application/vnd.openxmlformats-officedocument.presentationml.presentation"]
            }
            Self::Zip => &["application/zip", "application/x-zip-compressed"],
            Self::Xml => &["application/xml", "text/xml"],
            Self::Json => &["application/json"],
            Self::Mp3 => &["audio/mpeg"],
            Self::Mp4 => &["video/mp4"],
        }
    }

    /// True if `content_type` is one of this category's MIME types,
    /// ignoring case.
    #[must_use]
    pub fn accepts(self, content_type: &str) -> bool {
        self.mime_types()
            .iter()
            .any(|mime| mime.eq_ignore_ascii_case(content_type))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ALLOWED FILE TYPES
// ============================================================================

/// Ordered set of allowed categories, fixed once built.
///
/// Duplicates are dropped on construction; the first occurrence keeps its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FileType>", into = "Vec<FileType>")]
pub struct AllowedFileTypes {
    types: SmallVec<[FileType; 4]>,
}

impl AllowedFileTypes {
    /// Returns the categories in configuration order.
    #[must_use]
    pub fn as_slice(&self) -> &[FileType] {
        &self.types
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True when nothing is configured; the type check is then skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over the categories.
    pub fn iter(&self) -> impl Iterator<Item = FileType> + '_ {
        self.types.iter().copied()
    }

    /// Category names joined with `,` (`PDF,DOCX`).
    #[must_use]
    pub fn names(&self) -> String {
        self.types
            .iter()
            .map(|ft| ft.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// True if any category accepts `content_type`.
    #[must_use]
    pub fn accepts(&self, content_type: &str) -> bool {
        self.types.iter().any(|ft| ft.accepts(content_type))
    }
}

impl FromIterator<FileType> for AllowedFileTypes {
    fn from_iter<I: IntoIterator<Item = FileType>>(iter: I) -> Self {
        let mut types: SmallVec<[FileType; 4]> = SmallVec::new();
        for ft in iter {
            if !types.contains(&ft) {
                types.push(ft);
            }
        }
        Self { types }
    }
}

impl From<Vec<FileType>> for AllowedFileTypes {
    fn from(types: Vec<FileType>) -> Self {
        types.into_iter().collect()
    }
}

impl From<AllowedFileTypes> for Vec<FileType> {
    fn from(allowed: AllowedFileTypes) -> Self {
        allowed.types.into_vec()
    }
}

// ============================================================================
// FILE TYPES VALIDATOR
// ============================================================================

/// Validates the declared content type of an upload.
///
/// Failure messages come from a template with two placeholders: `{0}` is the
/// field's display name and `{1}` the allowed category names. The default
/// template is [`SINGLE_TYPE_TEMPLATE`] for one category and
/// [`MULTIPLE_TYPES_TEMPLATE`] otherwise.
///
/// # Examples
///
/// ```rust
/// use formguard_validator::foundation::Validate;
/// use formguard_validator::validators::{FileType, FileTypes, FormFile};
///
/// let rule = FileTypes::new([FileType::Pdf]).with_display_name("Resume");
///
/// assert!(rule.validate(&FormFile::new("cv.pdf", "APPLICATION/PDF", 10)).is_ok());
///
/// let err = rule.validate(&FormFile::new("cv.png", "image/png", 10)).unwrap_err();
/// assert_eq!(err.message, "Resume should be in PDF format.");
///
/// // No file at all is not this rule's concern
/// assert!(rule.check(None).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FileTypes {
    allowed: AllowedFileTypes,
    display_name: Cow<'static, str>,
    template: Option<Cow<'static, str>>,
}

impl FileTypes {
    /// Creates a validator accepting the given categories.
    pub fn new(allowed: impl IntoIterator<Item = FileType>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
            display_name: Cow::Borrowed("File"),
            template: None,
        }
    }

    /// Sets the field label used in messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_display_name(mut self, display_name: impl Into<Cow<'static, str>>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Overrides the unsupported-type message template.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, template: impl Into<Cow<'static, str>>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Returns the allowed categories.
    #[must_use]
    pub fn allowed(&self) -> &AllowedFileTypes {
        &self.allowed
    }

    /// Returns the field label used in messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Validates an optional upload; `None` always passes.
    pub fn check(&self, file: Option<&dyn UploadedFile>) -> Result<(), ValidationError> {
        match file {
            None => Ok(()),
            Some(file) => self.check_file(file),
        }
    }

    fn check_file(&self, input: &dyn UploadedFile) -> Result<(), ValidationError> {
        if input.is_empty() {
            tracing::debug!(field = %self.display_name, "rejected empty upload");
            return Err(ValidationError::new(ErrorCode::EmptyFile, EMPTY_FILE_MESSAGE)
                .with_field(self.display_name.clone()));
        }

        if self.allowed.is_empty() || self.allowed.accepts(input.content_type()) {
            return Ok(());
        }

        let names = self.allowed.names();
        tracing::debug!(
            field = %self.display_name,
            content_type = %input.content_type(),
            allowed = %names,
            "rejected upload content type"
        );

        let message = format_template(
            self.template(),
            &[self.display_name.as_ref(), names.as_str()],
        );
        Err(
            ValidationError::new(ErrorCode::UnsupportedFileType, message)
                .with_field(self.display_name.clone())
                .with_param("allowed", names)
                .with_param("actual", input.content_type().to_owned()),
        )
    }

    fn template(&self) -> &str {
        match &self.template {
            Some(template) => template,
            None if self.allowed.len() == 1 => SINGLE_TYPE_TEMPLATE,
            None => MULTIPLE_TYPES_TEMPLATE,
        }
    }
}

impl Validate for FileTypes {
    type Input = dyn UploadedFile;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.check_file(input)
    }
}

/// Checks an optional upload against a list of categories.
///
/// An empty `allowed` list skips the type check.
pub fn validate_file_type(
    file: Option<&dyn UploadedFile>,
    allowed: &[FileType],
    display_name: &str,
) -> Result<(), ValidationError> {
    FileTypes::new(allowed.iter().copied())
        .with_display_name(display_name.to_owned())
        .check(file)
}

/// Substitutes positional `{n}` placeholders in one pass.
///
/// Unknown indices and unmatched braces are copied through unchanged.
fn format_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            args.get(index).map(|arg| (*arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================

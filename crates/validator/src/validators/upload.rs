//! Uploaded file abstraction
//!
//! The transport layer (multipart parsing, temporary storage) belongs to the
//! host. Validators only need the byte length and the content type the client
//! declared, exposed through [`UploadedFile`].

use serde::{Deserialize, Serialize};

/// A file received from a client.
pub trait UploadedFile: Send + Sync {
    /// Length of the content in bytes.
    fn len(&self) -> u64;

    /// MIME type declared by the client, e.g. `application/pdf`.
    fn content_type(&self) -> &str;

    /// Original file name, if the host kept it.
    fn file_name(&self) -> Option<&str> {
        None
    }

    /// True when the file has no content.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: UploadedFile + ?Sized> UploadedFile for &T {
    fn len(&self) -> u64 {
        (**self).len()
    }

    fn content_type(&self) -> &str {
        (**self).content_type()
    }

    fn file_name(&self) -> Option<&str> {
        (**self).file_name()
    }
}

/// Metadata of an uploaded file, as a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFile {
    /// Original filename
    pub name: String,

    /// Declared MIME type
    pub content_type: String,

    /// File size in bytes
    pub size: u64,
}

impl FormFile {
    /// Creates file metadata from its parts.
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }

    /// Creates file metadata sized after an in-memory body.
    pub fn from_bytes(name: impl Into<String>, content_type: impl Into<String>, body: &[u8]) -> Self {
        Self::new(name, content_type, body.len() as u64)
    }

    /// File size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl UploadedFile for FormFile {
    fn len(&self) -> u64 {
        self.size
    }

    fn content_type(&self) -> &str {
        &self.content_type
    }

    fn file_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

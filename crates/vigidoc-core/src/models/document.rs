use bytes::Bytes;

use super::{ContentType, FileSize};
use crate::error::DomainError;

/// Raw user-provided file, before any validation.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl FileUpload {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// A file that passed local validation and can be submitted for
/// verification. Cannot exist in an invalid state: construction validates
/// the declared content type first, then the size (first error wins).
#[derive(Debug, Clone)]
pub struct DocumentToVerify {
    filename: String,
    content_type: ContentType,
    file_size: FileSize,
    bytes: Bytes,
}

impl DocumentToVerify {
    pub fn new(file: FileUpload) -> Result<Self, DomainError> {
        let content_type = ContentType::parse(&file.content_type)?;
        let file_size = FileSize::new(file.bytes.len() as u64)?;

        Ok(Self {
            filename: file.filename,
            content_type,
            file_size,
            bytes: file.bytes,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn file_size(&self) -> FileSize {
        self.file_size
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type.is_pdf()
    }

    pub fn is_image(&self) -> bool {
        self.content_type.is_image()
    }
}

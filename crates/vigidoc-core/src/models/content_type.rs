use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::SUPPORTED_CONTENT_TYPES;
use crate::error::DomainError;

/// Content types the verification service accepts. Construction goes through
/// [`ContentType::parse`]; any other media type is a hard failure, never
/// silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "application/pdf")]
    Pdf,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/webp")]
    Webp,
}

impl ContentType {
    /// Validate a raw media type string against the supported set.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match raw {
            "application/pdf" => Ok(ContentType::Pdf),
            "image/png" => Ok(ContentType::Png),
            "image/jpeg" => Ok(ContentType::Jpeg),
            "image/webp" => Ok(ContentType::Webp),
            other => Err(DomainError::UnsupportedFileType(other.to_string())),
        }
    }

    pub fn is_supported(raw: &str) -> bool {
        SUPPORTED_CONTENT_TYPES.contains(&raw)
    }

    /// Detect the content type from file magic numbers. Returns `None` when
    /// the signature is not one of the supported formats.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        // PDF: "%PDF"
        if data.starts_with(b"%PDF") {
            return Some(ContentType::Pdf);
        }
        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ContentType::Png);
        }
        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ContentType::Jpeg);
        }
        // WebP: RIFF ... WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ContentType::Webp);
        }
        None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Pdf => "application/pdf",
            ContentType::Png => "image/png",
            ContentType::Jpeg => "image/jpeg",
            ContentType::Webp => "image/webp",
        }
    }

    pub fn is_pdf(&self) -> bool {
        matches!(self, ContentType::Pdf)
    }

    pub fn is_image(&self) -> bool {
        !self.is_pdf()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::parse(s)
    }
}

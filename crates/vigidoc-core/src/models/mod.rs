//! Domain models for document verification.

pub mod content_type;
pub mod detected_type;
pub mod document;
pub mod document_family;
pub mod failure_code;
pub mod file_size;
pub mod trust_level;
pub mod verdict;
pub mod verification;

pub use content_type::ContentType;
pub use detected_type::DetectedDocumentType;
pub use document::{DocumentToVerify, FileUpload};
pub use document_family::DocumentFamily;
pub use failure_code::FailureCode;
pub use file_size::FileSize;
pub use trust_level::TrustLevel;
pub use verdict::Verdict;
pub use verification::{FileMetadata, VerificationResult, VerificationResultProps};

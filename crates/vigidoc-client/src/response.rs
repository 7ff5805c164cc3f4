//! Wire types for the verification endpoint.
//!
//! Field names follow the API's snake_case contract; enumerated fields
//! deserialize straight into the domain enums, so a body with an unknown
//! spelling fails to parse instead of leaking through.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use vigidoc_core::models::{
    DetectedDocumentType, DocumentFamily, FailureCode, FileMetadata, TrustLevel,
    VerificationResult, VerificationResultProps, Verdict,
};

/// JSON body of a successful `POST /v1/verify` response.
#[derive(Debug, Deserialize)]
pub struct VerifyResponse {
    pub verification_id: String,
    pub verdict: Verdict,
    pub detected_type: DetectedDocumentType,
    pub trust_level: TrustLevel,
    pub requires_online_verification: bool,
    pub online_verification_url: Option<String>,
    pub document_type: Option<String>,
    pub document_type_label: Option<String>,
    pub document_family: DocumentFamily,
    pub emission_date: Option<String>,
    pub issuer: Option<String>,
    pub extracted_fields: HashMap<String, String>,
    pub failure_code: Option<FailureCode>,
    pub failure_reason: Option<String>,
    pub warnings: Vec<String>,
    pub file: Option<FileResponse>,
    pub verified_at: DateTime<Utc>,
}

/// Nested `file` object of the response body.
#[derive(Debug, Deserialize)]
pub struct FileResponse {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl VerifyResponse {
    /// Map the wire shape onto the domain result, field for field.
    pub fn into_domain(self) -> VerificationResult {
        let file = self.file.map(|file| FileMetadata {
            filename: file.filename,
            content_type: file.content_type,
            size_bytes: file.size_bytes,
        });

        VerificationResult::new(VerificationResultProps {
            verification_id: self.verification_id,
            verdict: self.verdict,
            detected_type: self.detected_type,
            trust_level: self.trust_level,
            requires_online_verification: self.requires_online_verification,
            online_verification_url: self.online_verification_url,
            document_type: self.document_type,
            document_type_label: self.document_type_label,
            document_family: self.document_family,
            emission_date: self.emission_date,
            issuer: self.issuer,
            extracted_fields: self.extracted_fields,
            failure_code: self.failure_code,
            failure_reason: self.failure_reason,
            warnings: self.warnings,
            file,
            verified_at: self.verified_at,
        })
    }
}

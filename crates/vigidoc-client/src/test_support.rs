//! Shared fixtures for unit tests.

use std::collections::HashMap;

use vigidoc_core::models::{
    DetectedDocumentType, DocumentFamily, TrustLevel, VerificationResult,
    VerificationResultProps, Verdict,
};

/// Minimal valid verification result, tagged with the given id.
pub(crate) fn stub_result(verification_id: &str) -> VerificationResult {
    VerificationResult::new(VerificationResultProps {
        verification_id: verification_id.to_string(),
        verdict: Verdict::Valid,
        detected_type: DetectedDocumentType::Signed2dDoc,
        trust_level: TrustLevel::High,
        requires_online_verification: false,
        online_verification_url: None,
        document_type: None,
        document_type_label: None,
        document_family: DocumentFamily::Unknown,
        emission_date: None,
        issuer: None,
        extracted_fields: HashMap::new(),
        failure_code: None,
        failure_reason: None,
        warnings: Vec::new(),
        file: None,
        verified_at: "2024-01-20T10:30:00Z".parse().unwrap(),
    })
}

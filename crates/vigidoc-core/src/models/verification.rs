use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::{DetectedDocumentType, DocumentFamily, FailureCode, TrustLevel, Verdict};

/// File metadata echoed back by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Everything the service reports for one verification. The response mapper
/// is responsible for having validated enumerated fields; this is a pure
/// data carrier.
#[derive(Debug, Clone)]
pub struct VerificationResultProps {
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
    pub file: Option<FileMetadata>,
    pub verified_at: DateTime<Utc>,
}

/// Immutable verification verdict. Collection-valued accessors return
/// independent copies so callers can never mutate the instance through them.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    props: VerificationResultProps,
}

impl VerificationResult {
    pub fn new(props: VerificationResultProps) -> Self {
        Self { props }
    }

    pub fn verification_id(&self) -> &str {
        &self.props.verification_id
    }

    pub fn verdict(&self) -> Verdict {
        self.props.verdict
    }

    pub fn detected_type(&self) -> DetectedDocumentType {
        self.props.detected_type
    }

    pub fn trust_level(&self) -> TrustLevel {
        self.props.trust_level
    }

    pub fn requires_online_verification(&self) -> bool {
        self.props.requires_online_verification
    }

    pub fn online_verification_url(&self) -> Option<&str> {
        self.props.online_verification_url.as_deref()
    }

    pub fn document_type(&self) -> Option<&str> {
        self.props.document_type.as_deref()
    }

    pub fn document_type_label(&self) -> Option<&str> {
        self.props.document_type_label.as_deref()
    }

    pub fn document_family(&self) -> DocumentFamily {
        self.props.document_family
    }

    pub fn emission_date(&self) -> Option<&str> {
        self.props.emission_date.as_deref()
    }

    pub fn issuer(&self) -> Option<&str> {
        self.props.issuer.as_deref()
    }

    /// Extracted field name → value mapping. Returns a copy.
    pub fn extracted_fields(&self) -> HashMap<String, String> {
        self.props.extracted_fields.clone()
    }

    pub fn failure_code(&self) -> Option<FailureCode> {
        self.props.failure_code
    }

    pub fn failure_reason(&self) -> Option<&str> {
        self.props.failure_reason.as_deref()
    }

    /// Ordered warning list. Returns a copy.
    pub fn warnings(&self) -> Vec<String> {
        self.props.warnings.clone()
    }

    pub fn file(&self) -> Option<&FileMetadata> {
        self.props.file.as_ref()
    }

    pub fn verified_at(&self) -> DateTime<Utc> {
        self.props.verified_at
    }

    pub fn is_valid(&self) -> bool {
        self.props.verdict == Verdict::Valid
    }

    pub fn is_invalid(&self) -> bool {
        self.props.verdict == Verdict::Invalid
    }

    pub fn is_indeterminate(&self) -> bool {
        self.props.verdict == Verdict::Indeterminate
    }

    pub fn has_high_trust(&self) -> bool {
        self.props.trust_level == TrustLevel::High
    }

    pub fn has_medium_trust(&self) -> bool {
        self.props.trust_level == TrustLevel::Medium
    }

    pub fn has_low_trust(&self) -> bool {
        self.props.trust_level == TrustLevel::Low
    }
}

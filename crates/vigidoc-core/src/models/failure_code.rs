use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Machine-readable reason for a non-valid verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureCode {
    #[serde(rename = "NO_2D_DOC")]
    No2dDoc,
    #[serde(rename = "PARSE_ERROR")]
    ParseError,
    #[serde(rename = "UNSUPPORTED_VERSION")]
    UnsupportedVersion,
    #[serde(rename = "CERT_UNKNOWN")]
    CertUnknown,
    #[serde(rename = "CERT_REVOKED")]
    CertRevoked,
    #[serde(rename = "CERT_EXPIRED")]
    CertExpired,
    #[serde(rename = "BAD_SIGNATURE")]
    BadSignature,
    #[serde(rename = "ONLINE_VERIFICATION_REQUIRED")]
    OnlineVerificationRequired,
    #[serde(rename = "UNKNOWN_DOCUMENT")]
    UnknownDocument,
}

impl FailureCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::No2dDoc => "NO_2D_DOC",
            FailureCode::ParseError => "PARSE_ERROR",
            FailureCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            FailureCode::CertUnknown => "CERT_UNKNOWN",
            FailureCode::CertRevoked => "CERT_REVOKED",
            FailureCode::CertExpired => "CERT_EXPIRED",
            FailureCode::BadSignature => "BAD_SIGNATURE",
            FailureCode::OnlineVerificationRequired => "ONLINE_VERIFICATION_REQUIRED",
            FailureCode::UnknownDocument => "UNKNOWN_DOCUMENT",
        }
    }
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailureCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NO_2D_DOC" => Ok(FailureCode::No2dDoc),
            "PARSE_ERROR" => Ok(FailureCode::ParseError),
            "UNSUPPORTED_VERSION" => Ok(FailureCode::UnsupportedVersion),
            "CERT_UNKNOWN" => Ok(FailureCode::CertUnknown),
            "CERT_REVOKED" => Ok(FailureCode::CertRevoked),
            "CERT_EXPIRED" => Ok(FailureCode::CertExpired),
            "BAD_SIGNATURE" => Ok(FailureCode::BadSignature),
            "ONLINE_VERIFICATION_REQUIRED" => Ok(FailureCode::OnlineVerificationRequired),
            "UNKNOWN_DOCUMENT" => Ok(FailureCode::UnknownDocument),
            other => Err(format!("unknown failure code: {}", other)),
        }
    }
}

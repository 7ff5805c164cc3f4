use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Structural document-format classification recognized by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectedDocumentType {
    #[serde(rename = "signed_2d_doc")]
    Signed2dDoc,
    #[serde(rename = "kbis_infogreffe")]
    KbisInfogreffe,
    #[serde(rename = "urssaf_code")]
    UrssafCode,
    #[serde(rename = "unknown")]
    Unknown,
}

impl DetectedDocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedDocumentType::Signed2dDoc => "signed_2d_doc",
            DetectedDocumentType::KbisInfogreffe => "kbis_infogreffe",
            DetectedDocumentType::UrssafCode => "urssaf_code",
            DetectedDocumentType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DetectedDocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectedDocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signed_2d_doc" => Ok(DetectedDocumentType::Signed2dDoc),
            "kbis_infogreffe" => Ok(DetectedDocumentType::KbisInfogreffe),
            "urssaf_code" => Ok(DetectedDocumentType::UrssafCode),
            "unknown" => Ok(DetectedDocumentType::Unknown),
            other => Err(format!("unknown detected document type: {}", other)),
        }
    }
}

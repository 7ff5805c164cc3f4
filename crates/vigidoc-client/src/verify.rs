use std::sync::Arc;

use vigidoc_core::error::VerifyError;
use vigidoc_core::models::{DocumentToVerify, FileUpload, VerificationResult};

use crate::gateway::DocumentVerifierGateway;

/// Outcome of one verification attempt. `VerifyError` is a closed set, so
/// consumers can match on every failure kind exhaustively; no raw transport
/// or parsing error ever crosses this boundary.
pub type VerifyDocumentResult = Result<VerificationResult, VerifyError>;

/// Orchestrates local validation and the gateway call.
pub struct VerifyDocument {
    gateway: Arc<dyn DocumentVerifierGateway>,
}

impl VerifyDocument {
    pub fn new(gateway: Arc<dyn DocumentVerifierGateway>) -> Self {
        Self { gateway }
    }

    /// Validate the file locally, then submit it. Domain validation errors
    /// short-circuit before any network call; gateway errors pass through
    /// unchanged.
    pub async fn execute(&self, file: FileUpload) -> VerifyDocumentResult {
        let document = DocumentToVerify::new(file)?;
        self.gateway.verify(&document).await
    }
}

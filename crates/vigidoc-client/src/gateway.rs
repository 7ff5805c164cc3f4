use async_trait::async_trait;

use vigidoc_core::error::VerifyError;
use vigidoc_core::models::{DocumentToVerify, VerificationResult};

/// Seam between the use case and the network: the only interface the core
/// requires an external verifier to implement.
#[async_trait]
pub trait DocumentVerifierGateway: Send + Sync {
    async fn verify(&self, document: &DocumentToVerify)
        -> Result<VerificationResult, VerifyError>;
}

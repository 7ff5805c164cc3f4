//! HTTP adapter for the document verifier gateway.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use uuid::Uuid;

use vigidoc_core::constants::CLIENT_ID;
use vigidoc_core::error::VerifyError;
use vigidoc_core::models::{DocumentToVerify, VerificationResult};
use vigidoc_core::ClientConfig;

use crate::gateway::DocumentVerifierGateway;
use crate::response::VerifyResponse;
use crate::session::SessionStore;

const CORRELATION_ID_HEADER: &str = "X-Correlation-Id";
const CLIENT_ID_HEADER: &str = "X-Client-Id";
const SESSION_ID_HEADER: &str = "X-Session-Id";
const RATE_LIMIT_RESET_HEADER: &str = "X-RateLimit-Reset";

const CONNECTIVITY_ERROR: &str =
    "Failed to connect to verification service. Please check your internet connection.";

/// Gateway implementation over the remote HTTP endpoint. The session store
/// is injected so session correlation can be tested without ambient state.
pub struct HttpDocumentVerifierGateway {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl HttpDocumentVerifierGateway {
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            session,
        })
    }
}

/// Map a non-200 response status onto the error taxonomy. The rate limit
/// reset header is only consulted for 429.
fn map_failure_status(status: StatusCode, rate_limit_reset: Option<&str>) -> VerifyError {
    match status.as_u16() {
        429 => VerifyError::RateLimitExceeded {
            retry_after_seconds: rate_limit_reset.and_then(|value| value.trim().parse().ok()),
        },
        400 => {
            VerifyError::verification_failed("Invalid request: file may be missing or malformed")
        }
        413 => VerifyError::verification_failed("File is too large. Maximum size is 10 MB."),
        415 => {
            VerifyError::verification_failed("Unsupported file type. Please upload a PDF or image.")
        }
        code if code >= 500 => VerifyError::Network {
            message: "Server error. Please try again later.".to_string(),
            status_code: Some(code),
        },
        code => VerifyError::Network {
            message: format!("Unexpected response status: {}", code),
            status_code: Some(code),
        },
    }
}

#[async_trait]
impl DocumentVerifierGateway for HttpDocumentVerifierGateway {
    async fn verify(
        &self,
        document: &DocumentToVerify,
    ) -> Result<VerificationResult, VerifyError> {
        let part = Part::bytes(document.bytes().to_vec())
            .file_name(document.filename().to_string())
            .mime_str(document.content_type().as_str())
            .map_err(|err| VerifyError::unexpected(err.into()))?;
        let form = Form::new().part("file", part);

        let correlation_id = Uuid::new_v4().to_string();
        let mut request = self
            .client
            .post(format!("{}/v1/verify", self.base_url))
            .header(CORRELATION_ID_HEADER, &correlation_id)
            .header(CLIENT_ID_HEADER, CLIENT_ID)
            .multipart(form);
        if let Some(session_id) = self.session.get() {
            request = request.header(SESSION_ID_HEADER, session_id);
        }

        tracing::debug!(
            correlation_id = %correlation_id,
            filename = %document.filename(),
            size = document.file_size().bytes(),
            "Submitting document for verification"
        );

        let response = request.send().await.map_err(|err| {
            tracing::warn!(correlation_id = %correlation_id, error = %err, "Verification request failed to send");
            VerifyError::Network {
                message: CONNECTIVITY_ERROR.to_string(),
                status_code: None,
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let rate_limit_reset = response
                .headers()
                .get(RATE_LIMIT_RESET_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            tracing::warn!(
                correlation_id = %correlation_id,
                status = status.as_u16(),
                "Verification request rejected"
            );
            return Err(map_failure_status(status, rate_limit_reset.as_deref()));
        }

        // The server may rotate the session id on any successful response.
        if let Some(session_id) = response
            .headers()
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            self.session.set(session_id.to_string());
        }

        let body: VerifyResponse = response.json().await.map_err(|err| {
            VerifyError::VerificationFailed {
                message: "Failed to parse verification response".to_string(),
                source: Some(err.into()),
            }
        })?;

        tracing::debug!(
            correlation_id = %correlation_id,
            verification_id = %body.verification_id,
            verdict = %body.verdict,
            "Verification completed"
        );

        Ok(body.into_domain())
    }
}

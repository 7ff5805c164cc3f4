//! End-to-end upload workflow tests driving the uploader with a stub
//! gateway. The clock is paused, so the pacing delay costs nothing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use vigidoc_client::{
    DocumentUploader, DocumentVerifierGateway, UploadStatus, VerifyDocument,
};
use vigidoc_core::error::VerifyError;
use vigidoc_core::models::{
    DetectedDocumentType, DocumentFamily, DocumentToVerify, FileUpload, TrustLevel,
    VerificationResult, VerificationResultProps, Verdict,
};

fn result_for(verification_id: &str) -> VerificationResult {
    VerificationResult::new(VerificationResultProps {
        verification_id: verification_id.to_string(),
        verdict: Verdict::Valid,
        detected_type: DetectedDocumentType::KbisInfogreffe,
        trust_level: TrustLevel::High,
        requires_online_verification: false,
        online_verification_url: None,
        document_type: None,
        document_type_label: None,
        document_family: DocumentFamily::Entreprise,
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

fn pdf(name: &str) -> FileUpload {
    FileUpload::new(name, "application/pdf", vec![0u8; 64])
}

/// Blocks each verification until the test releases its gate, then answers
/// with a result tagged by the uploaded filename. Calls without a gate
/// resolve immediately. Every call reports its filename on `started`.
struct GatedGateway {
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    started: mpsc::UnboundedSender<String>,
}

impl GatedGateway {
    fn new(started: mpsc::UnboundedSender<String>) -> Self {
        Self {
            gates: Mutex::new(HashMap::new()),
            started,
        }
    }

    fn gate(&self, filename: &str) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.gates
            .lock()
            .unwrap()
            .insert(filename.to_string(), gate);
        release
    }
}

#[async_trait]
impl DocumentVerifierGateway for GatedGateway {
    async fn verify(
        &self,
        document: &DocumentToVerify,
    ) -> Result<VerificationResult, VerifyError> {
        let gate = self.gates.lock().unwrap().remove(document.filename());
        let _ = self.started.send(document.filename().to_string());
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(result_for(document.filename()))
    }
}

fn uploader_with_gateway() -> (
    Arc<DocumentUploader>,
    Arc<GatedGateway>,
    mpsc::UnboundedReceiver<String>,
) {
    let (started_tx, started_rx) = mpsc::unbounded_channel();
    let gateway = Arc::new(GatedGateway::new(started_tx));
    let uploader = Arc::new(DocumentUploader::new(VerifyDocument::new(gateway.clone())));
    (uploader, gateway, started_rx)
}

#[tokio::test(start_paused = true)]
async fn successful_attempt_ends_in_success() {
    let (uploader, _gateway, mut started) = uploader_with_gateway();

    uploader.select_file(pdf("kbis.pdf")).await;

    assert_eq!(started.recv().await.unwrap(), "kbis.pdf");
    let state = uploader.state();
    assert_eq!(state.status, UploadStatus::Success);
    assert_eq!(state.result.unwrap().verification_id(), "kbis.pdf");
    assert!(state.error.is_none());
    assert_eq!(state.selected_file.unwrap().filename, "kbis.pdf");
}

#[tokio::test(start_paused = true)]
async fn invalid_file_fails_without_reaching_the_gateway() {
    let (uploader, _gateway, mut started) = uploader_with_gateway();

    uploader
        .select_file(FileUpload::new("notes.txt", "text/plain", vec![0u8; 64]))
        .await;

    let state = uploader.state();
    assert_eq!(state.status, UploadStatus::Error);
    let message = state.error.unwrap();
    assert!(message.contains("Unsupported file type"));
    assert!(message.contains("text/plain"));
    assert!(started.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn newer_selection_wins_over_a_late_resolution() {
    let (uploader, gateway, mut started) = uploader_with_gateway();
    let release_a = gateway.gate("a.pdf");
    let release_b = gateway.gate("b.pdf");

    let first = {
        let uploader = uploader.clone();
        tokio::spawn(async move { uploader.select_file(pdf("a.pdf")).await })
    };
    assert_eq!(started.recv().await.unwrap(), "a.pdf");

    // Select B while A's verification is still in flight.
    let second = {
        let uploader = uploader.clone();
        tokio::spawn(async move { uploader.select_file(pdf("b.pdf")).await })
    };
    assert_eq!(started.recv().await.unwrap(), "b.pdf");

    // A resolves late; its outcome must not overwrite B's attempt.
    release_a.send(()).unwrap();
    first.await.unwrap();
    let state = uploader.state();
    assert_eq!(state.status, UploadStatus::Processing);
    assert!(state.result.is_none());
    assert_eq!(state.selected_file.as_ref().unwrap().filename, "b.pdf");

    release_b.send(()).unwrap();
    second.await.unwrap();
    let state = uploader.state();
    assert_eq!(state.status, UploadStatus::Success);
    assert_eq!(state.result.unwrap().verification_id(), "b.pdf");
}

#[tokio::test(start_paused = true)]
async fn reset_discards_an_in_flight_attempt() {
    let (uploader, gateway, mut started) = uploader_with_gateway();
    let release = gateway.gate("a.pdf");

    let attempt = {
        let uploader = uploader.clone();
        tokio::spawn(async move { uploader.select_file(pdf("a.pdf")).await })
    };
    assert_eq!(started.recv().await.unwrap(), "a.pdf");

    uploader.reset();
    release.send(()).unwrap();
    attempt.await.unwrap();

    let state = uploader.state();
    assert_eq!(state.status, UploadStatus::Idle);
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(state.selected_file.is_none());
}

#[tokio::test(start_paused = true)]
async fn reset_after_success_clears_everything() {
    let (uploader, _gateway, _started) = uploader_with_gateway();

    uploader.select_file(pdf("kbis.pdf")).await;
    assert_eq!(uploader.state().status, UploadStatus::Success);

    uploader.reset();
    let state = uploader.state();
    assert_eq!(state.status, UploadStatus::Idle);
    assert!(state.result.is_none());
    assert!(state.error.is_none());
    assert!(state.selected_file.is_none());
}

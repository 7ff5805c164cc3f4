//! Upload workflow: a headless state machine plus the async driver that
//! runs one verification attempt per selected file.
//!
//! Selecting a file is submitting it; there is no separate submit step. A
//! newer selection (or a reset) supersedes any in-flight attempt, and the
//! superseded attempt's outcome is discarded rather than applied.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use vigidoc_core::error::VerifyError;
use vigidoc_core::models::{FileUpload, VerificationResult};

use crate::verify::VerifyDocument;

/// Fixed pacing delay between file selection and the network call. UX
/// pacing, not a network wait.
pub const UPLOAD_PACING: Duration = Duration::from_millis(400);

/// Shown for every non-domain failure so transport details never reach the
/// user.
pub const GENERIC_UPLOAD_ERROR: &str = "Verification failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Processing,
    Success,
    Error,
}

/// Identifies one verification attempt for staleness checks. Only
/// [`UploadStateMachine::select_file`] hands these out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(u64);

/// Snapshot the presentation layer renders.
#[derive(Debug, Clone)]
pub struct UploadState {
    pub status: UploadStatus,
    pub result: Option<VerificationResult>,
    pub error: Option<String>,
    pub selected_file: Option<FileUpload>,
}

impl UploadState {
    fn initial() -> Self {
        Self {
            status: UploadStatus::Idle,
            result: None,
            error: None,
            selected_file: None,
        }
    }
}

/// Drives idle → uploading → processing → success | error. The attempt
/// counter is monotonic; transitions carrying a stale attempt id are
/// discarded, which is the only cancellation semantic (the in-flight
/// request itself is not aborted).
#[derive(Debug)]
pub struct UploadStateMachine {
    state: UploadState,
    attempt: u64,
}

impl Default for UploadStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadStateMachine {
    pub fn new() -> Self {
        Self {
            state: UploadState::initial(),
            attempt: 0,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Begin a new verification attempt. Any prior state is discarded and
    /// the machine enters `Uploading`.
    pub fn select_file(&mut self, file: FileUpload) -> AttemptId {
        self.attempt += 1;
        self.state = UploadState {
            status: UploadStatus::Uploading,
            result: None,
            error: None,
            selected_file: Some(file),
        };
        AttemptId(self.attempt)
    }

    /// Advance the given attempt from `Uploading` to `Processing`. Returns
    /// false when the attempt has been superseded.
    pub fn begin_processing(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) || self.state.status != UploadStatus::Uploading {
            return false;
        }
        self.state.status = UploadStatus::Processing;
        true
    }

    /// Apply the outcome of the given attempt. Returns false when the
    /// attempt has been superseded and the outcome was discarded.
    pub fn complete(
        &mut self,
        attempt: AttemptId,
        outcome: Result<VerificationResult, VerifyError>,
    ) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        match outcome {
            Ok(result) => {
                self.state.status = UploadStatus::Success;
                self.state.result = Some(result);
                self.state.error = None;
            }
            Err(error) => {
                self.state.status = UploadStatus::Error;
                self.state.result = None;
                self.state.error = Some(user_message(&error));
            }
        }
        true
    }

    /// Return to the initial state, from any state. Supersedes any pending
    /// attempt.
    pub fn reset(&mut self) {
        self.attempt += 1;
        self.state = UploadState::initial();
    }

    pub fn is_current(&self, attempt: AttemptId) -> bool {
        attempt.0 == self.attempt
    }
}

/// User-facing message for a failed attempt. Domain errors carry safe,
/// pre-defined wording; every other kind collapses to the generic message.
fn user_message(error: &VerifyError) -> String {
    match error {
        VerifyError::Domain(domain) => domain.to_string(),
        _ => GENERIC_UPLOAD_ERROR.to_string(),
    }
}

/// Runs verification attempts against the state machine. Shared behind
/// `Arc` by whatever renders the state.
pub struct DocumentUploader {
    machine: Mutex<UploadStateMachine>,
    verify_document: VerifyDocument,
}

impl DocumentUploader {
    pub fn new(verify_document: VerifyDocument) -> Self {
        Self {
            machine: Mutex::new(UploadStateMachine::new()),
            verify_document,
        }
    }

    /// Snapshot of the current upload state.
    pub fn state(&self) -> UploadState {
        self.lock().state().clone()
    }

    /// Select a file and run the full attempt: pacing delay, then the
    /// verification call. Resolves once the attempt completes or is
    /// superseded.
    pub async fn select_file(&self, file: FileUpload) {
        let attempt = self.lock().select_file(file.clone());
        tracing::info!(
            filename = %file.filename,
            size = file.bytes.len(),
            "Verification attempt started"
        );

        tokio::time::sleep(UPLOAD_PACING).await;
        if !self.lock().begin_processing(attempt) {
            tracing::debug!(filename = %file.filename, "Attempt superseded before processing");
            return;
        }

        let outcome = self.verify_document.execute(file.clone()).await;
        if !self.lock().complete(attempt, outcome) {
            tracing::debug!(filename = %file.filename, "Discarded outcome of superseded attempt");
        }
    }

    /// Return to the initial state, superseding any in-flight attempt.
    pub fn reset(&self) {
        self.lock().reset();
    }

    fn lock(&self) -> MutexGuard<'_, UploadStateMachine> {
        // The guard is never held across an await point.
        self.machine.lock().unwrap_or_else(|e| e.into_inner())
    }
}

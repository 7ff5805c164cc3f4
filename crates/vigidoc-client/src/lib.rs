//! VigiDoc client library.
//!
//! Submits documents to the remote verification service and drives the
//! upload workflow: local validation, multipart upload with session
//! correlation, response mapping, and an upload state machine a
//! presentation layer can render.

pub mod gateway;
pub mod http;
pub mod response;
pub mod session;
pub mod upload;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_support;

pub use gateway::DocumentVerifierGateway;
pub use http::HttpDocumentVerifierGateway;
pub use session::{MemorySessionStore, SessionStore};
pub use upload::{AttemptId, DocumentUploader, UploadState, UploadStateMachine, UploadStatus};
pub use verify::{VerifyDocument, VerifyDocumentResult};

//! VigiDoc CLI — submit a document to the verification service.
//!
//! Set VIGIDOC_API_URL (or API_URL) to point at a non-production endpoint.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use vigidoc_cli::{derive_content_type, init_tracing};
use vigidoc_client::{
    DocumentUploader, HttpDocumentVerifierGateway, MemorySessionStore, UploadStatus,
    VerifyDocument,
};
use vigidoc_core::models::FileUpload;
use vigidoc_core::ClientConfig;

#[derive(Parser)]
#[command(name = "vigidoc", about = "VigiDoc document verification CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify a document file (PDF, PNG, JPEG, or WebP)
    Verify {
        /// Path to the file to verify
        file: PathBuf,
        /// Declared content type (detected from the file when omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Verify { file, content_type } => verify(file, content_type).await,
    }
}

async fn verify(path: PathBuf, declared: Option<String>) -> anyhow::Result<()> {
    let data = std::fs::read(&path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string();
    let content_type = match declared {
        Some(content_type) => content_type,
        // An empty string fails validation with the proper domain error.
        None => derive_content_type(&path, &data)
            .map(|content_type| content_type.as_str().to_string())
            .unwrap_or_default(),
    };

    let config = ClientConfig::from_env();
    let session = Arc::new(MemorySessionStore::new());
    let gateway = HttpDocumentVerifierGateway::new(&config, session)
        .context("Failed to create verification gateway")?;
    let uploader = DocumentUploader::new(VerifyDocument::new(Arc::new(gateway)));

    uploader
        .select_file(FileUpload::new(filename, content_type, data))
        .await;

    let state = uploader.state();
    match state.status {
        UploadStatus::Success => {
            let result = state
                .result
                .context("Upload succeeded without a result")?;
            println!("Verdict:        {}", result.verdict());
            println!("Trust level:    {}", result.trust_level());
            println!("Detected type:  {}", result.detected_type());
            println!("Family:         {}", result.document_family());
            if let Some(label) = result.document_type_label() {
                println!("Document:       {}", label);
            }
            if let Some(issuer) = result.issuer() {
                println!("Issuer:         {}", issuer);
            }
            if let Some(date) = result.emission_date() {
                println!("Emission date:  {}", date);
            }
            for (name, value) in result.extracted_fields() {
                println!("Field:          {} = {}", name, value);
            }
            if let Some(code) = result.failure_code() {
                println!("Failure code:   {}", code);
            }
            if let Some(reason) = result.failure_reason() {
                println!("Failure reason: {}", reason);
            }
            for warning in result.warnings() {
                println!("Warning:        {}", warning);
            }
            if result.requires_online_verification() {
                if let Some(url) = result.online_verification_url() {
                    println!("Verify online:  {}", url);
                }
            }
            println!("Verified at:    {}", result.verified_at().to_rfc3339());
            Ok(())
        }
        UploadStatus::Error => {
            anyhow::bail!(
                "{}",
                state
                    .error
                    .unwrap_or_else(|| "Verification failed".to_string())
            )
        }
        _ => anyhow::bail!("Upload did not complete"),
    }
}

//! Helpers for the VigiDoc CLI binary.

use std::path::Path;

use vigidoc_core::models::ContentType;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Derive the content type for a local file: magic numbers first, the file
/// extension as a fallback. Unknown inputs return `None` so validation can
/// reject them with a proper error.
pub fn derive_content_type(path: &Path, data: &[u8]) -> Option<ContentType> {
    if let Some(detected) = ContentType::from_bytes(data) {
        return Some(detected);
    }

    match path
        .extension()
        .and_then(|ext| ext.to_str())?
        .to_ascii_lowercase()
        .as_str()
    {
        "pdf" => Some(ContentType::Pdf),
        "png" => Some(ContentType::Png),
        "jpg" | "jpeg" => Some(ContentType::Jpeg),
        "webp" => Some(ContentType::Webp),
        _ => None,
    }
}

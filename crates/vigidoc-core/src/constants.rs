//! Policy constants shared across the VigiDoc client crates.

/// Maximum accepted file size: 10 MiB.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Content types the verification service accepts.
pub const SUPPORTED_CONTENT_TYPES: [&str; 4] = [
    "application/pdf",
    "image/png",
    "image/jpeg",
    "image/webp",
];

/// Fixed client identifier sent with every request.
pub const CLIENT_ID: &str = "WEB-BIP-VIGIDOC";

/// Production verification endpoint. Override with VIGIDOC_API_URL.
pub const DEFAULT_API_URL: &str = "https://api.vigidoc.bip-tech.fr";

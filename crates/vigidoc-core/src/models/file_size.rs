use crate::constants::MAX_FILE_SIZE_BYTES;
use crate::error::DomainError;

/// Validated file size. Invariant: `0 < bytes <= MAX_FILE_SIZE_BYTES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileSize(u64);

impl FileSize {
    pub fn new(bytes: u64) -> Result<Self, DomainError> {
        if bytes == 0 {
            return Err(DomainError::FileTooLarge(
                "File size must be positive".to_string(),
            ));
        }
        if bytes > MAX_FILE_SIZE_BYTES {
            return Err(DomainError::FileTooLarge(format!(
                "File size exceeds maximum allowed ({} bytes)",
                MAX_FILE_SIZE_BYTES
            )));
        }
        Ok(FileSize(bytes))
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }

    pub const fn max_bytes() -> u64 {
        MAX_FILE_SIZE_BYTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sizes_within_policy() {
        assert_eq!(FileSize::new(1).unwrap().bytes(), 1);
        assert_eq!(FileSize::new(1024).unwrap().bytes(), 1024);
    }

    #[test]
    fn accepts_exactly_the_maximum() {
        let size = FileSize::new(MAX_FILE_SIZE_BYTES).unwrap();
        assert_eq!(size.bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn rejects_one_byte_over_the_maximum() {
        let err = FileSize::new(MAX_FILE_SIZE_BYTES + 1).unwrap_err();
        assert!(matches!(err, DomainError::FileTooLarge(_)));
        assert!(err.to_string().contains("10485760"));
    }

    #[test]
    fn rejects_zero() {
        let err = FileSize::new(0).unwrap_err();
        assert!(matches!(err, DomainError::FileTooLarge(_)));
        assert_eq!(err.to_string(), "File size must be positive");
    }
}

//! Checksum calculation for import deduplication.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of a raw payload.
///
/// Used to skip re-imports of unchanged provider responses and to compare
/// the configured admin password hash.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = r#"[{"date":"2025-10-03"}]"#;
        let checksum1 = calculate_checksum(content);
        let checksum2 = calculate_checksum(content);
        assert_eq!(checksum1, checksum2);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let content1 = r#"[{"date":"2025-10-03"}]"#;
        let content2 = r#"[{"date":"2025-12-25"}]"#;
        let checksum1 = calculate_checksum(content1);
        let checksum2 = calculate_checksum(content2);
        assert_ne!(checksum1, checksum2);
    }

    #[test]
    fn test_known_digest() {
        // sha256("admin"), the default admin credential hash.
        assert_eq!(
            calculate_checksum("admin"),
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        );
    }
}

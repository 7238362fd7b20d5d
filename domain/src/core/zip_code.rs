//! ZipCode value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A Brazilian CEP (postal code) to be resolved by the race (Value Object)
///
/// The same value is handed to every provider and is never mutated while
/// a race is running. Construction normalizes the input to the bare
/// 8-digit form, accepting an optional `-` separator ("01153-000").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCode {
    digits: String,
}

impl ZipCode {
    /// Create a new CEP
    ///
    /// # Panics
    /// Panics if the input is not a valid 8-digit CEP
    pub fn new(input: impl AsRef<str>) -> Self {
        Self::try_new(input.as_ref()).expect("ZipCode must be a valid 8-digit CEP")
    }

    /// Try to create a new CEP, normalizing "01153-000" to "01153000"
    pub fn try_new(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let digits: String = match trimmed.split_once('-') {
            Some((prefix, suffix)) if prefix.len() == 5 && suffix.len() == 3 => {
                format!("{prefix}{suffix}")
            }
            Some(_) => return Err(DomainError::InvalidZipCode(trimmed.to_string())),
            None => trimmed.to_string(),
        };

        if digits.len() != 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidZipCode(trimmed.to_string()));
        }

        Ok(Self { digits })
    }

    /// Get the bare 8-digit form (as used in provider URLs)
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Get the human-readable "01153-000" form
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.digits[..5], &self.digits[5..])
    }
}

impl std::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_code_creation() {
        let zip = ZipCode::new("01153000");
        assert_eq!(zip.as_str(), "01153000");
    }

    #[test]
    fn test_zip_code_strips_separator() {
        let zip = ZipCode::new("01153-000");
        assert_eq!(zip.as_str(), "01153000");
    }

    #[test]
    fn test_zip_code_formatted() {
        let zip = ZipCode::new("01153000");
        assert_eq!(zip.formatted(), "01153-000");
    }

    #[test]
    fn test_try_new_rejects_garbage() {
        assert!(ZipCode::try_new("").is_err());
        assert!(ZipCode::try_new("0115300").is_err());
        assert!(ZipCode::try_new("011530000").is_err());
        assert!(ZipCode::try_new("01153-00").is_err());
        assert!(ZipCode::try_new("abcdefgh").is_err());
    }

    #[test]
    fn test_try_new_trims_whitespace() {
        let zip = ZipCode::try_new("  01153000 ").unwrap();
        assert_eq!(zip.as_str(), "01153000");
    }

    #[test]
    #[should_panic]
    fn test_invalid_zip_code_panics() {
        ZipCode::new("not-a-cep");
    }
}

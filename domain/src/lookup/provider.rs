//! Provider identity value object

use serde::{Deserialize, Serialize};

/// Name of an external address provider (Value Object)
///
/// Tags every answer so the caller can tell which source won the race.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderName(String);

impl ProviderName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProviderName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProviderName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_name_display() {
        let name = ProviderName::new("BrasilAPI");
        assert_eq!(name.to_string(), "BrasilAPI");
        assert_eq!(name.as_str(), "BrasilAPI");
    }
}

//! Normalized address data

use serde::{Deserialize, Serialize};

/// A normalized address as returned by a provider
///
/// Providers answer in their own wire formats; adapters map those into
/// this common shape before the race ever sees them. Fields a provider
/// does not know are left empty rather than failing the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// The CEP as reported by the provider
    pub zip_code: String,
    /// State abbreviation (e.g., "SP")
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
}

impl Address {
    pub fn new(
        zip_code: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        neighborhood: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            zip_code: zip_code.into(),
            state: state.into(),
            city: city.into(),
            neighborhood: neighborhood.into(),
            street: street.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_new() {
        let address = Address::new("01153-000", "SP", "São Paulo", "Barra Funda", "Rua Vitorino Carmilo");
        assert_eq!(address.state, "SP");
        assert_eq!(address.street, "Rua Vitorino Carmilo");
    }
}

//! CEP provider adapters
//!
//! Each adapter implements the `AddressProvider` port for one real
//! provider: one HTTP round-trip per lookup, no retries, cancellation
//! observed around the in-flight request. The reqwest client is injected
//! so callers (and tests) control the transport.

pub mod brasil_api;
pub mod via_cep;

pub use brasil_api::BrasilApiProvider;
pub use via_cep::ViaCepProvider;

use crate::config::FileProvidersConfig;
use ceprace_application::AddressProvider;
use std::sync::Arc;

/// Build the providers enabled in the configuration
pub fn build_providers(
    config: &FileProvidersConfig,
    client: &reqwest::Client,
) -> Vec<Arc<dyn AddressProvider>> {
    let mut providers: Vec<Arc<dyn AddressProvider>> = Vec::new();

    if config.brasil_api.enabled {
        providers.push(Arc::new(BrasilApiProvider::with_base_url(
            client.clone(),
            &config.brasil_api.base_url,
        )));
    }

    if config.via_cep.enabled {
        providers.push(Arc::new(ViaCepProvider::with_base_url(
            client.clone(),
            &config.via_cep.base_url,
        )));
    }

    providers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_build_providers_default_config() {
        let config = FileConfig::default();
        let providers = build_providers(&config.providers, &reqwest::Client::new());

        let names: Vec<_> = providers.iter().map(|p| p.name().as_str().to_string()).collect();
        assert_eq!(names, vec!["BrasilAPI", "ViaCEP"]);
    }

    #[test]
    fn test_build_providers_respects_enabled_flag() {
        let mut config = FileConfig::default();
        config.providers.brasil_api.enabled = false;

        let providers = build_providers(&config.providers, &reqwest::Client::new());
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].name().as_str(), "ViaCEP");
    }
}

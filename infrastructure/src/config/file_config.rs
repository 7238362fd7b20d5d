//! File configuration structures (TOML)

use crate::providers::{brasil_api::BRASIL_API_BASE_URL, via_cep::VIA_CEP_BASE_URL};
use serde::{Deserialize, Serialize};

/// Race settings from TOML (`[race]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRaceConfig {
    /// Overall deadline for a lookup race in milliseconds (default: 2000)
    pub deadline_ms: u64,
}

impl Default for FileRaceConfig {
    fn default() -> Self {
        Self { deadline_ms: 2000 }
    }
}

/// Settings for one provider (`[providers.*]` sections)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Whether this provider joins the race (default: true)
    pub enabled: bool,
    /// Base URL of the provider endpoint
    pub base_url: String,
}

impl FileProviderConfig {
    fn with_base_url(base_url: &str) -> Self {
        Self {
            enabled: true,
            base_url: base_url.to_string(),
        }
    }
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: String::new(),
        }
    }
}

/// Provider settings from TOML (`[providers]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// BrasilAPI settings
    pub brasil_api: FileProviderConfig,
    /// ViaCEP settings
    pub via_cep: FileProviderConfig,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            brasil_api: FileProviderConfig::with_base_url(BRASIL_API_BASE_URL),
            via_cep: FileProviderConfig::with_base_url(VIA_CEP_BASE_URL),
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub race: FileRaceConfig,
    pub providers: FileProvidersConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_toml() {
        let toml = r#"
            [race]
            deadline_ms = 750

            [providers.brasil_api]
            enabled = false
            base_url = "http://localhost:8080"
        "#;

        let config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.race.deadline_ms, 750);
        assert!(!config.providers.brasil_api.enabled);
        assert_eq!(config.providers.brasil_api.base_url, "http://localhost:8080");
        // Sections left out of the file keep their defaults
        assert!(config.providers.via_cep.enabled);
        assert_eq!(config.providers.via_cep.base_url, "https://viacep.com.br");
    }

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.race.deadline_ms, 2000);
        assert!(config.providers.brasil_api.enabled);
        assert!(config.providers.via_cep.enabled);
        assert_eq!(config.providers.brasil_api.base_url, "https://brasilapi.com.br");
        assert_eq!(config.providers.via_cep.base_url, "https://viacep.com.br");
    }
}

//! Infrastructure layer for ceprace
//!
//! Concrete adapters for the application's ports: reqwest-backed CEP
//! providers (BrasilAPI, ViaCEP) and file-based configuration loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileProviderConfig, FileProvidersConfig, FileRaceConfig};
pub use providers::{BrasilApiProvider, ViaCepProvider, build_providers};

//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileProviderConfig, FileProvidersConfig, FileRaceConfig};
pub use loader::ConfigLoader;

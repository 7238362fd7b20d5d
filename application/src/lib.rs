//! Application layer for ceprace
//!
//! Contains the lookup race use case and the ports through which it talks
//! to the outside world. Concrete provider adapters live in the
//! infrastructure layer and are injected at startup.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::address_provider::{AddressProvider, ProviderError};
pub use use_cases::race_lookup::{RaceLookupError, RaceLookupInput, RaceLookupUseCase};

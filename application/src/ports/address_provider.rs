//! Address provider port
//!
//! Defines the interface for querying one external CEP provider.

use async_trait::async_trait;
use ceprace_domain::{Address, ProviderName, ZipCode};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur during a single provider lookup
///
/// Every variant is terminal for that provider only; none of them ends
/// the race. The coordinator logs the failure and keeps waiting on the
/// remaining providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request construction failed: {0}")]
    BadRequest(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP status {0}")]
    HttpStatus(u16),

    #[error("Malformed payload: {0}")]
    DecodeError(String),

    #[error("CEP not found")]
    NotFound,

    #[error("Lookup cancelled")]
    Cancelled,
}

/// One external source capable of answering a CEP lookup
///
/// Implementations perform exactly one round-trip per call, honor the
/// cancellation token so an already-decided race can abort the in-flight
/// request, and never retry on their own.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Identity tag attached to this provider's answers
    fn name(&self) -> &ProviderName;

    /// Resolve a CEP into a normalized address
    async fn lookup(
        &self,
        zip_code: &ZipCode,
        cancel: &CancellationToken,
    ) -> Result<Address, ProviderError>;
}

//! Race outcome value objects - immutable terminal values of a lookup race.
//!
//! - [`ResolvedAddress`] - A winning answer tagged with its provider
//! - [`LookupOutcome`] - The race's terminal value: fastest answer or timeout

use crate::lookup::{address::Address, provider::ProviderName};
use std::time::Duration;

/// A successful answer tagged with the provider that produced it
///
/// At most one of these is ever consumed per race; answers produced after
/// the race has been decided are dropped unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    /// The provider that answered first
    pub provider: ProviderName,
    /// The normalized address
    pub address: Address,
    /// Observed latency of the winning call
    pub latency: Duration,
}

impl ResolvedAddress {
    pub fn new(provider: ProviderName, address: Address, latency: Duration) -> Self {
        Self {
            provider,
            address,
            latency,
        }
    }
}

/// Terminal value of a lookup race
///
/// Exactly one of these is produced per race. Individual provider failures
/// are never an outcome by themselves; a race in which every provider fails
/// runs out the clock and ends in `TimedOut`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The first valid answer to arrive before the deadline
    Fastest(ResolvedAddress),
    /// No valid answer arrived before the deadline
    TimedOut,
}

impl LookupOutcome {
    /// Returns `true` if the race ended without an answer.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupOutcome::TimedOut)
    }

    /// The winning answer, if there was one.
    pub fn resolved(&self) -> Option<&ResolvedAddress> {
        match self {
            LookupOutcome::Fastest(resolved) => Some(resolved),
            LookupOutcome::TimedOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resolved() -> ResolvedAddress {
        ResolvedAddress::new(
            ProviderName::new("ViaCEP"),
            Address::new("01153-000", "SP", "São Paulo", "Barra Funda", "Rua Vitorino Carmilo"),
            Duration::from_millis(48),
        )
    }

    #[test]
    fn test_outcome_is_timeout() {
        assert!(LookupOutcome::TimedOut.is_timeout());
        assert!(!LookupOutcome::Fastest(sample_resolved()).is_timeout());
    }

    #[test]
    fn test_outcome_resolved() {
        let outcome = LookupOutcome::Fastest(sample_resolved());
        assert_eq!(outcome.resolved().unwrap().provider.as_str(), "ViaCEP");
        assert!(LookupOutcome::TimedOut.resolved().is_none());
    }
}

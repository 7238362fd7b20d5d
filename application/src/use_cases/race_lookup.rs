//! Race Lookup use case
//!
//! Issues the same CEP lookup to every configured provider at once and
//! returns whichever valid answer arrives first, bounded by a single
//! wall-clock deadline. Losers are cancelled, never awaited.

use crate::ports::address_provider::{AddressProvider, ProviderError};
use ceprace_domain::{LookupOutcome, ResolvedAddress, ZipCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Deadline applied when the caller does not pick one
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

/// Errors that can occur setting up a lookup race
///
/// Provider failures are not here on purpose: once the race is running,
/// its only terminal values are the two `LookupOutcome` variants.
#[derive(Error, Debug)]
pub enum RaceLookupError {
    #[error("No providers configured")]
    NoProviders,
}

/// Input for the RaceLookup use case
#[derive(Debug, Clone)]
pub struct RaceLookupInput {
    /// The CEP to resolve
    pub zip_code: ZipCode,
    /// Budget for the whole race, shared by all providers
    pub deadline: Duration,
}

impl RaceLookupInput {
    pub fn new(zip_code: ZipCode) -> Self {
        Self {
            zip_code,
            deadline: DEFAULT_DEADLINE,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Use case for racing a CEP lookup across independent providers
///
/// Each execution is a fresh race: a cancellation token scoped to the
/// call, one task per provider, and a completion channel from which at
/// most one answer is ever consumed.
pub struct RaceLookupUseCase {
    providers: Vec<Arc<dyn AddressProvider>>,
}

impl RaceLookupUseCase {
    pub fn new(providers: Vec<Arc<dyn AddressProvider>>) -> Self {
        Self { providers }
    }

    /// Execute the race and wait for its terminal value.
    ///
    /// Returns as soon as the first answer arrives or the deadline fires,
    /// whichever happens first. Still-running providers are signalled to
    /// stop on the way out but are not awaited.
    pub async fn execute(&self, input: RaceLookupInput) -> Result<LookupOutcome, RaceLookupError> {
        if self.providers.is_empty() {
            return Err(RaceLookupError::NoProviders);
        }

        info!(
            "Racing {} providers for CEP {} (deadline {} ms)",
            self.providers.len(),
            input.zip_code,
            input.deadline.as_millis()
        );

        // Cancelled when the guard drops, so every exit path (winner,
        // timeout, panic) signals the stragglers.
        let cancel = CancellationToken::new();
        let _teardown = cancel.clone().drop_guard();

        // Capacity covers every writer: a losing send can park in the
        // buffer and be dropped unread, it never blocks and there is
        // nothing to close twice.
        let (tx, mut rx) = mpsc::channel::<ResolvedAddress>(self.providers.len());

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let zip_code = input.zip_code.clone();
            let cancel = cancel.clone();
            let tx = tx.clone();

            tokio::spawn(async move {
                Self::query_provider(provider, zip_code, cancel, tx).await;
            });
        }
        drop(tx);

        let deadline = tokio::time::sleep(input.deadline);
        tokio::pin!(deadline);

        // When every sender is gone (all providers failed) the channel
        // yields None; the race still runs out the clock, matching the
        // "all failed looks like too slow" contract.
        let mut channel_open = true;
        loop {
            tokio::select! {
                received = rx.recv(), if channel_open => match received {
                    Some(resolved) => {
                        info!(
                            "Fastest answer from {} in {} ms",
                            resolved.provider,
                            resolved.latency.as_millis()
                        );
                        return Ok(LookupOutcome::Fastest(resolved));
                    }
                    None => {
                        debug!("All providers failed before the deadline");
                        channel_open = false;
                    }
                },
                _ = &mut deadline => {
                    info!("Deadline elapsed without an answer");
                    return Ok(LookupOutcome::TimedOut);
                }
            }
        }
    }

    /// Run one provider's attempt and report through the completion channel.
    ///
    /// Failures are logged and swallowed here; they must never reach the
    /// channel or the caller.
    async fn query_provider(
        provider: Arc<dyn AddressProvider>,
        zip_code: ZipCode,
        cancel: CancellationToken,
        tx: mpsc::Sender<ResolvedAddress>,
    ) {
        let started = Instant::now();

        match provider.lookup(&zip_code, &cancel).await {
            Ok(address) => {
                let resolved =
                    ResolvedAddress::new(provider.name().clone(), address, started.elapsed());
                // Fails once the coordinator has returned; the race is
                // already decided, so the answer is simply dropped.
                let _ = tx.send(resolved).await;
            }
            Err(ProviderError::Cancelled) => {
                debug!("Provider {} cancelled", provider.name());
            }
            Err(e) => {
                warn!("Provider {} failed: {}", provider.name(), e);
            }
        }
    }
}

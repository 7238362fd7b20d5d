//! Domain layer for ceprace
//!
//! This crate contains the core value objects and result types for a
//! postal-code lookup race. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Race
//!
//! A race issues the same lookup to several independent providers at once
//! and keeps whichever valid answer arrives first:
//!
//! - **ZipCode**: the immutable query key, shared by every provider
//! - **ResolvedAddress**: a normalized answer tagged with the provider
//!   that produced it
//! - **LookupOutcome**: the race's terminal value, either the fastest
//!   answer or a timeout

pub mod core;
pub mod lookup;

// Re-export commonly used types
pub use self::core::{error::DomainError, zip_code::ZipCode};
pub use lookup::{
    address::Address,
    outcome::{LookupOutcome, ResolvedAddress},
    provider::ProviderName,
};

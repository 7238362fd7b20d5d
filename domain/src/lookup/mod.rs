//! Lookup types - addresses, provider identity, and race outcomes

pub mod address;
pub mod outcome;
pub mod provider;

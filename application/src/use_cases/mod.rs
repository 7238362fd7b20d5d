//! Use cases

pub mod race_lookup;

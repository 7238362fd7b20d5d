//! Ports - interfaces implemented by infrastructure adapters

pub mod address_provider;

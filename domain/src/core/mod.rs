//! Core domain types

pub mod error;
pub mod zip_code;

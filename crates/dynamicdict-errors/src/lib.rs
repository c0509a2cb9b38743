//! dynamicdict errors and result types
//!
//! This crate provides the error handling infrastructure shared by the
//! dynamicdict crates: the failure modes of the missing-key protocol and
//! the result alias used across the public API.

mod error;

pub use error::*;

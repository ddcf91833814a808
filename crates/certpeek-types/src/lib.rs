#![forbid(unsafe_code)]
#![doc = "Common error types for certpeek."]

pub mod error;

pub use error::*;

//! # Prechac Core
//!
//! Core library for multi-juggler passing patterns written in generalized
//! siteswap notation. From a juggler count and a compact digit/letter string
//! it derives the full per-hand throw sequence, checks its validity, and
//! renders it into several textual notations (local siteswap, JoePass,
//! Prechac, plain-language description).
//!
//! ## Features
//!
//! - **serde**: Enable serialization of the pattern types
//!
//! ## Example
//!
//! ```ignore
//! use prechac_core::Pattern;
//!
//! let pattern = Pattern::new(2, "633")?;
//! println!("{}", pattern.local_siteswap());
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::PatternError;
pub use types::{HandLayout, Pattern, Side, Throw};

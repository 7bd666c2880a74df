//! Pattern type for multi-juggler passing siteswaps.
//!
//! A pattern is built once from a juggler count and a notation string like
//! `"633"`; construction parses, validates, expands the global sequence into
//! per-hand throws, and normalizes the starting phase and hand-crossing
//! convention.

mod core;
mod lcm;
mod parser;
mod render;
mod validate;


// Re-export public types
pub use core::Pattern;
pub use lcm::lcm_of;
pub use parser::parse_swaps;
pub use validate::{average_props, check_collisions};

//! Version criteria evaluation
//!
//! Parses criteria expressions such as `>2.0` or `2.0.5<>4.0.3` and checks
//! runtime version strings against them.
//!
//! # Modules
//!
//! - [`value`]: Loose dotted version values and their ordering
//! - [`criteria`]: Criteria parsing, evaluation and re-serialization
//! - [`error`]: Error type shared with the dispatch layer

pub mod criteria;
pub mod error;
pub mod value;

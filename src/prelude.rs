//! Prelude module for shaped_date crate.
//!
//! Re-exports commonly used derive macros and logging macros.

#[allow(unused_imports)]
pub use derive_more::Display;
#[allow(unused_imports)]
pub use tracing::{debug, trace};

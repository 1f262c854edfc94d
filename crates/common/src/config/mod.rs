//! # Configuration Abstractions
//!
//! Layered settings loading and the shared validation contract used by the
//! syncwrap crates.

pub mod loader;
pub mod traits;

// Re-export commonly used items
pub use loader::*;
pub use traits::*;

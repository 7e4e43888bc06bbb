//! pg2xmi CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The main entry point is the `pg2xmi` binary.

pub mod cli;
pub mod metadata;
pub mod output;
pub mod schema;

// Re-export commonly used types
pub use cli::Args;

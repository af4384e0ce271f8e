//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`input`]: Sources of normalized input lines
//! - [`output`]: Destinations for rendered results
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
pub mod input;
pub mod output;

//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: Reads, sorts and decodes a message
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

pub mod dto;
pub mod orchestrator;

pub use dto::DecodeReport;
pub use orchestrator::DecodeMessage;

// crates/infra/src/lib.rs
pub mod persistence;
pub mod sink;
pub mod source;

pub use sink::{FileSink, StdoutSink};
pub use source::{FileLineSource, StdinLineSource};

// crates/shared-kernel/src/value_objects/mod.rs
pub mod line_number;
pub mod order_key;
pub mod word;

pub use line_number::LineNumber;
pub use order_key::OrderKey;
pub use word::Word;

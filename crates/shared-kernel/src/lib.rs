// crates/shared-kernel/src/lib.rs
pub use error::{
    DecodeError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError, PresentationError,
    PresentationResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{LineNumber, OrderKey, Word};

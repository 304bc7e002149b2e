//! Foundation module - Shared domain primitives.
//!
//! Contains the timestamp value object and the error types that every
//! other domain module builds on.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::Timestamp;

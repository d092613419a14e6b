//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`]: hard validation failures with literal messages
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: UTF-8 safe string helpers
//! - [`time`]: millisecond timestamps and id generation

pub mod error;
pub mod string;
pub mod time;

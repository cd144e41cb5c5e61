//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;

pub use logging::{request_logging, REQUEST_ID_HEADER};

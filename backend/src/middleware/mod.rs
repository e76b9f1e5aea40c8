//! Request middleware.
//!
//! Purpose: define middleware for request lifecycle concerns. Currently this
//! is request tracing and access logging.

pub mod trace;

pub use trace::Trace;

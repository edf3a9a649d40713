//! HTTP layer
//!
//! Request handlers grouped by resource.

pub mod handlers;

//! Middleware applied to every response.

pub mod security_headers;

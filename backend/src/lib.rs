//! Coffee catalog backend service

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]
#![warn(missing_docs)]

/// Request handlers and the response envelope
pub mod handlers;

/// HTTP middleware
pub mod middleware;

/// Route definitions
pub mod routes;

/// HTTP server setup
pub mod server;

/// Configuration, errors and request types
pub mod types;

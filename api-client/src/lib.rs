//! Typed HTTP client for the coffee catalog API
//!
//! Every request carries the bearer token supplied by an injected
//! [`CredentialProvider`].

mod client;
mod credentials;
mod error;

pub use client::CoffeeApiClient;
pub use credentials::{CredentialProvider, StaticCredentials};
pub use error::{ClientError, ClientResult};

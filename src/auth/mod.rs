//! Authentication module
//!
//! Every GraphQL request carries the bearer credential held by the
//! `Authenticator`. The credential is configured once and never logged.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;

#[cfg(test)]
mod tests;

//! HTTP client module
//!
//! Thin transport over `reqwest`: attaches the credential, applies the
//! request timeout and classifies failed responses. There is no retry;
//! the first failure is surfaced to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

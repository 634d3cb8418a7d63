//! # Revizor API
//! HTTP client for the homework review service.

pub mod client;

pub use client::ReviewApiClient;

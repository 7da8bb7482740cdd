//! Thin HTTP transport over `reqwest`
//!
//! The transport builds and executes single requests. It performs no retries
//! and no status-code interpretation; both belong to the request pipeline.

mod client;

pub use client::{HttpClient, HttpClientBuilder, HttpError};

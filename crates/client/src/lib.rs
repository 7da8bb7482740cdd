//! # NexEvent Client
//!
//! Async client for the NexEvent event-management service.
//!
//! The crate is built around two components:
//!
//! - **Credential Store** ([`auth`]): owns the access/refresh credential pair
//!   and cached user metadata, persisted through an injected
//!   [`auth::CredentialBackend`].
//! - **Request Pipeline** ([`api`]): executes one logical request, attaches
//!   the access credential, classifies the response into a closed
//!   [`api::ApiError`] taxonomy, and on the first authorization failure of a
//!   protected call runs the refresh protocol and retries exactly once.
//!
//! # Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use nexevent_client::auth::CredentialStore;
//! use nexevent_client::{ApiClient, ClientConfig};
//! use nexevent_domain::EventFilter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(CredentialStore::in_memory());
//!     let client = ApiClient::new(ClientConfig::default(), store)?;
//!
//!     client.login("alice", "hunter2").await?;
//!     let events = client.list_events(&EventFilter::default().search("rust")).await?;
//!     println!("{} events", events.count);
//!
//!     client.logout().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, ApiRequest};
pub use auth::{CredentialBackend, CredentialStore, FileBackend, MemoryBackend, StoreError};
pub use config::ClientConfig;
pub use http::{HttpClient, HttpError};

//! Credential storage
//!
//! Owns the access/refresh credential pair used by the request pipeline.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ CredentialStore  │  Token-pair semantics (set / set_access / clear)
//! └────────┬─────────┘
//!          │
//!          └──► CredentialBackend   (injected persistence)
//!                    ├── MemoryBackend   (process-local)
//!                    └── FileBackend     (JSON document on disk)
//! ```
//!
//! The store is constructed once per session and shared (`Arc`) between the
//! request pipeline and any direct callers. Persistence is injected through
//! the [`CredentialBackend`] trait so tests can substitute doubles.
//!
//! Invariants upheld here and in the pipeline:
//! - the access credential is never sent to the refresh endpoint;
//! - the refresh credential is never sent to any other endpoint;
//! - both credentials are destroyed together on logout or refresh failure,
//!   while a successful refresh replaces only the access slot.

mod backend;
mod store;
mod types;

pub use backend::{CredentialBackend, FileBackend, MemoryBackend, StoreError};
pub use store::CredentialStore;
pub use types::StoredCredentials;

//! # NexEvent Domain
//!
//! Wire types and models for the NexEvent event-management service.
//!
//! This crate contains:
//! - Event and user data types as the service serializes them
//! - Request payloads and response envelopes
//! - Domain constants (event categories)
//!
//! ## Architecture
//! - No dependencies on other NexEvent crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod constants;
pub mod types;

// Re-export commonly used items
pub use types::event::{Event, EventFilter, EventListResponse, EventPayload, EventResponse};
pub use types::session::{LoginResponse, MessageResponse, RegisterPayload, RegisterResponse};
pub use types::user::User;

//! Authenticated request pipeline
//!
//! Executes one logical request against the NexEvent service:
//!
//! - attaches the stored access credential as a bearer header;
//! - classifies the response status into the closed [`ApiError`] taxonomy;
//! - on the first 401 of a protected call, runs the refresh protocol against
//!   the credential store and retries the original request exactly once.
//!
//! One logical call moves through these states:
//!
//! ```text
//! Start ──(no creds & auth required)──► AuthRequired            [terminal]
//! Start ──► Sent ──(401 & first attempt)──► Refreshing
//!                       ├── RefreshOK ──► Sent(retry) ──► <any> [terminal]
//!                       └── RefreshFailed ──► SessionExpired    [terminal]
//! Start ──► Sent ──► <other classification>                     [terminal]
//! ```
//!
//! Classification happens once, here; callers match on the [`ApiError`]
//! variant and never inspect message text.

pub mod client;
pub mod errors;
pub mod events;
pub mod request;
pub mod session;

pub use client::ApiClient;
pub use errors::{ApiError, FieldViolations};
pub use request::ApiRequest;

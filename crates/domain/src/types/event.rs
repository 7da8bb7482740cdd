//! Event types as the service serializes them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single event as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub category: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Decimal rendered as a string by the service serializer.
    #[serde(default)]
    pub ticket_price: Option<String>,
    #[serde(default)]
    pub organiser: Option<String>,
    #[serde(default)]
    pub organiser_username: Option<String>,
    #[serde(default)]
    pub organiser_name: Option<String>,
    #[serde(default)]
    pub interested_count: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Client-supplied fields for creating or updating an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPayload {
    pub name: String,
    pub description: String,
    pub date_time: String,
    pub location: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_price: Option<String>,
}

/// Optional filters for the event listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl EventFilter {
    /// Filter by free-text search over name, description and location.
    #[must_use]
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Filter by category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.category.is_none()
    }
}

/// Envelope for list endpoints (`events/`, `events/my/`).
#[derive(Debug, Clone, Deserialize)]
pub struct EventListResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: i64,
    pub events: Vec<Event>,
}

/// Envelope for single-event endpoints (details, create, update, RSVP).
#[derive(Debug, Clone, Deserialize)]
pub struct EventResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub event: Event,
}

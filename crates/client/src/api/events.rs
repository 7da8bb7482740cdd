//! Event endpoints

use nexevent_domain::{
    EventFilter, EventListResponse, EventPayload, EventResponse, MessageResponse,
};

use super::client::ApiClient;
use super::errors::ApiError;

impl ApiClient {
    /// List upcoming events, optionally filtered by search text and category.
    pub async fn list_events(&self, filter: &EventFilter) -> Result<EventListResponse, ApiError> {
        let mut endpoint = String::from("events/");
        let query = encode_filter(filter);
        if !query.is_empty() {
            endpoint.push('?');
            endpoint.push_str(&query);
        }

        self.get(&endpoint, false).await
    }

    /// Details of a single event.
    pub async fn event_details(&self, event_id: i64) -> Result<EventResponse, ApiError> {
        self.get(&format!("events/{event_id}/"), false).await
    }

    /// Create an event. Requires authentication.
    pub async fn create_event(&self, payload: &EventPayload) -> Result<EventResponse, ApiError> {
        self.post("events/create/", payload, true).await
    }

    /// Update an event. Requires authentication.
    pub async fn update_event(
        &self,
        event_id: i64,
        payload: &EventPayload,
    ) -> Result<EventResponse, ApiError> {
        self.put(&format!("events/{event_id}/"), payload, true).await
    }

    /// Delete an event. Requires authentication; only the organiser may
    /// delete their own events.
    pub async fn delete_event(&self, event_id: i64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("events/{event_id}/delete/"), true).await
    }

    /// Events created by the signed-in user.
    pub async fn my_events(&self) -> Result<EventListResponse, ApiError> {
        self.get("events/my/", true).await
    }

    /// Toggle the signed-in user's interest in an event.
    pub async fn toggle_rsvp(&self, event_id: i64) -> Result<EventResponse, ApiError> {
        self.post(&format!("events/{event_id}/rsvp/"), &serde_json::json!({}), true).await
    }
}

fn encode_filter(filter: &EventFilter) -> String {
    let mut pairs = Vec::new();
    if let Some(search) = filter.search.as_deref() {
        if !search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(search)));
        }
    }
    if let Some(category) = filter.category.as_deref() {
        if !category.is_empty() {
            pairs.push(format!("category={}", urlencoding::encode(category)));
        }
    }
    pairs.join("&")
}

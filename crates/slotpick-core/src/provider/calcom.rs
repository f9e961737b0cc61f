//! Cal.com availability adapter.
//!
//! Queries the public slots endpoint and normalizes the date-keyed payload
//! into [`TimeSlot`]s. Booking itself, authentication and retry policy are
//! out of scope -- this adapter only reads availability.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::AvailabilityProvider;
use crate::error::ProviderError;
use crate::selection::TimeSlot;

/// Cal.com-style availability provider.
///
/// Slot ends are derived from the configured event duration, since the
/// slots endpoint reports start instants only.
pub struct CalComProvider {
    base_url: String,
    event_type_id: u64,
    duration_minutes: i64,
    client: Client,
}

/// Wire shape of the slots endpoint:
/// `{"slots": {"2026-03-02": [{"time": "2026-03-02T09:00:00Z"}, ...]}}`.
#[derive(Debug, Deserialize)]
struct SlotsResponse {
    slots: BTreeMap<String, Vec<SlotEntry>>,
}

#[derive(Debug, Deserialize)]
struct SlotEntry {
    time: DateTime<Utc>,
}

impl CalComProvider {
    /// Create a provider for the given API base URL and event type.
    ///
    /// # Errors
    /// Returns an error if `base_url` is not a valid URL.
    pub fn new(
        base_url: &str,
        event_type_id: u64,
        duration_minutes: i64,
    ) -> Result<Self, ProviderError> {
        Url::parse(base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            event_type_id,
            duration_minutes,
            client: Client::new(),
        })
    }

    fn slots_url(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&format!("{}/slots", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("eventTypeId", &self.event_type_id.to_string())
            .append_pair("startTime", &from.to_rfc3339())
            .append_pair("endTime", &to.to_rfc3339());
        Ok(url)
    }
}

#[async_trait]
impl AvailabilityProvider for CalComProvider {
    fn name(&self) -> &str {
        "calcom"
    }

    async fn fetch_slots(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TimeSlot>, ProviderError> {
        let url = self.slots_url(from, to)?;
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::ApiError {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let body = resp.text().await?;
        let parsed: SlotsResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        let mut slots = Vec::new();
        for entry in parsed.slots.into_values().flatten() {
            let start = entry.time;
            let end = start + Duration::minutes(self.duration_minutes);
            let slot = TimeSlot::try_new(start, end)
                .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
            slots.push(slot);
        }
        slots.sort_by_key(|s| s.start);

        Ok(slots)
    }
}

//! Scheduling provider adapters.
//!
//! Providers expose a recipient's open-slot availability; adapters
//! normalize it into [`TimeSlot`]s for the selection engine. Adapters are
//! stateless between calls and carry no credentials -- only public
//! availability surfaces are queried, and retrying failed requests is left
//! to the caller.

mod calcom;

pub use calcom::CalComProvider;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::ProviderError;
use crate::selection::TimeSlot;

/// Every scheduling provider adapter implements this trait.
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Unique identifier (e.g. "calcom").
    fn name(&self) -> &str;

    /// Fetch open slots within the given window, normalized to
    /// [`TimeSlot`]s. Order is not guaranteed to the caller; the selection
    /// engine sorts for itself.
    async fn fetch_slots(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<TimeSlot>, ProviderError>;
}

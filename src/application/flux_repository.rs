// Repository trait for flux data access
use crate::domain::reading::FluxSeries;
use async_trait::async_trait;

#[async_trait]
pub trait FluxRepository: Send + Sync {
    /// Fetch the full flux history for the flare channel, time-ascending.
    /// The series may be empty when the upstream has no matching records.
    async fn fetch_series(&self) -> anyhow::Result<FluxSeries>;
}

// Error kinds terminal to a render pass
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Network, timeout, HTTP-status, or decode failure during acquisition.
    /// Carries the underlying cause so it can be surfaced to the user.
    #[error("failed to fetch solar flux data: {source:#}")]
    FetchFailed { source: anyhow::Error },

    /// The upstream request succeeded but produced zero matching-channel
    /// records. Distinct from a fetch failure.
    #[error("no data available from the upstream feed")]
    EmptyUpstream,

    /// Windowing a non-empty series produced zero entries. The windowing
    /// guarantee makes this unreachable; kept as a defensive check.
    #[error("flux window contains no entries")]
    EmptyWindow,
}

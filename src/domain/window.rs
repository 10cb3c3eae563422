// Lookback windowing and summary over a flux series
use crate::domain::classification::{FlareClass, M_CLASS_THRESHOLD};
use crate::domain::reading::{FluxReading, FluxSeries};
use crate::error::TelemetryError;
use chrono::{DateTime, Duration, Utc};

/// Lookback bounds in hours, one hour to seven days, matching the upstream
/// feed's retention.
pub const MIN_LOOKBACK_HOURS: i64 = 1;
pub const MAX_LOOKBACK_HOURS: i64 = 168;

/// A period maximum at or above the M-class boundary raises the alert flag,
/// one tier below the peak classification threshold, so moderate activity is
/// surfaced even after the instantaneous reading has subsided.
pub const ALERT_THRESHOLD: f64 = M_CLASS_THRESHOLD;

/// The subsequence of a series within `lookback_hours` of the newest reading.
/// A pure derivation, rebuilt on every render pass.
#[derive(Debug, Clone)]
pub struct FluxWindow {
    pub lookback_hours: i64,
    pub cutoff: DateTime<Utc>,
    pub entries: Vec<FluxReading>,
}

impl FluxSeries {
    /// Window relative to the maximum timestamp present in the data, never
    /// wall-clock now, so a lagging feed still yields a full window. The
    /// newest reading always satisfies the cutoff, so the result is non-empty
    /// whenever the series is. Callers check `is_empty` first; an empty
    /// series yields an empty window.
    pub fn window(&self, lookback_hours: i64) -> FluxWindow {
        let Some(newest) = self.latest().map(|r| r.time) else {
            return FluxWindow {
                lookback_hours,
                cutoff: DateTime::<Utc>::MIN_UTC,
                entries: Vec::new(),
            };
        };
        let cutoff = newest - Duration::hours(lookback_hours);

        let entries = self
            .readings()
            .iter()
            .filter(|r| r.time >= cutoff)
            .copied()
            .collect();

        FluxWindow {
            lookback_hours,
            cutoff,
            entries,
        }
    }
}

/// Derived metrics for one window: the latest reading with its tier, and the
/// period maximum with the alert flag.
#[derive(Debug, Clone)]
pub struct FluxSummary {
    pub latest: FluxReading,
    pub latest_class: FlareClass,
    pub period_max: f64,
    pub alert: bool,
}

impl FluxWindow {
    pub fn summarize(&self) -> Result<FluxSummary, TelemetryError> {
        let latest = *self.entries.last().ok_or(TelemetryError::EmptyWindow)?;
        let period_max = self
            .entries
            .iter()
            .map(|r| r.flux)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(FluxSummary {
            latest,
            latest_class: FlareClass::classify(latest.flux),
            period_max,
            alert: period_max >= ALERT_THRESHOLD,
        })
    }
}

// Flux reading domain models
use chrono::{DateTime, Utc};

/// The GOES wavelength band used for flare classification. Records from any
/// other band are discarded during acquisition.
pub const FLARE_CHANNEL: &str = "0.1-0.8nm";

/// One X-ray irradiance measurement (W/m²), immutable once fetched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluxReading {
    pub time: DateTime<Utc>,
    pub flux: f64,
}

impl FluxReading {
    pub fn new(time: DateTime<Utc>, flux: f64) -> Self {
        Self { time, flux }
    }
}

/// Time-ordered readings for the flare channel. The constructor sorts
/// ascending by time, so the ordering invariant holds for any input and
/// `latest()` is always the newest measurement.
#[derive(Debug, Clone, Default)]
pub struct FluxSeries {
    readings: Vec<FluxReading>,
}

impl FluxSeries {
    pub fn new(mut readings: Vec<FluxReading>) -> Self {
        readings.sort_by_key(|r| r.time);
        Self { readings }
    }

    pub fn readings(&self) -> &[FluxReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The reading with the maximum timestamp present in the data.
    pub fn latest(&self) -> Option<&FluxReading> {
        self.readings.last()
    }
}

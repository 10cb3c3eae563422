// Dashboard domain model - the payload handed to the chart page
use crate::domain::window::{FluxSummary, FluxWindow};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub time: DateTime<Utc>,
    pub flux: f64,
}

/// Everything the renderer needs for one refresh: the windowed entries, the
/// current tier with its color, the period maximum, and the alert flag. The
/// log-scale flag is echoed through untouched; it affects rendering only.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub entries: Vec<ChartPoint>,
    pub latest_flux: f64,
    pub class: &'static str,
    pub color: &'static str,
    pub severity_rank: u8,
    pub period_max: f64,
    pub alert: bool,
    pub lookback_hours: i64,
    pub log_scale: bool,
}

impl Dashboard {
    pub fn new(window: &FluxWindow, summary: &FluxSummary, log_scale: bool) -> Self {
        let entries = window
            .entries
            .iter()
            .map(|r| ChartPoint {
                time: r.time,
                flux: r.flux,
            })
            .collect();

        Self {
            title: format!("Solar X-ray Flux (last {}h)", window.lookback_hours),
            entries,
            latest_flux: summary.latest.flux,
            class: summary.latest_class.label(),
            color: summary.latest_class.color(),
            severity_rank: summary.latest_class.severity_rank(),
            period_max: summary.period_max,
            alert: summary.alert,
            lookback_hours: window.lookback_hours,
            log_scale,
        }
    }
}

// Dashboard service - Use case for building the flux dashboard
use crate::application::flux_repository::FluxRepository;
use crate::domain::dashboard::Dashboard;
use crate::error::TelemetryError;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn FluxRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn FluxRepository>) -> Self {
        Self { repository }
    }

    /// One render pass: fetch (possibly cached), check for data, window,
    /// summarize. Every error aborts the pass; there is no partial dashboard.
    pub async fn get_dashboard(
        &self,
        lookback_hours: i64,
        log_scale: bool,
    ) -> Result<Dashboard, TelemetryError> {
        let series = self
            .repository
            .fetch_series()
            .await
            .map_err(|source| TelemetryError::FetchFailed { source })?;

        if series.is_empty() {
            return Err(TelemetryError::EmptyUpstream);
        }

        let window = series.window(lookback_hours);
        let summary = window.summarize()?;

        tracing::debug!(
            entries = window.entries.len(),
            class = summary.latest_class.label(),
            period_max = summary.period_max,
            "built flux dashboard"
        );

        Ok(Dashboard::new(&window, &summary, log_scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::{FluxReading, FluxSeries};
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};

    struct StubRepository {
        fluxes: Vec<f64>,
        fail: bool,
    }

    #[async_trait]
    impl FluxRepository for StubRepository {
        async fn fetch_series(&self) -> anyhow::Result<FluxSeries> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            let base = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
            Ok(FluxSeries::new(
                self.fluxes
                    .iter()
                    .enumerate()
                    .map(|(i, &flux)| {
                        FluxReading::new(base + Duration::minutes(10 * i as i64), flux)
                    })
                    .collect(),
            ))
        }
    }

    fn service(fluxes: Vec<f64>, fail: bool) -> DashboardService {
        DashboardService::new(Arc::new(StubRepository { fluxes, fail }))
    }

    #[tokio::test]
    async fn test_quiet_latest_with_earlier_spike() {
        // Five readings over 50 minutes, one M-class spike in the middle.
        let service = service(vec![1e-7, 1e-7, 1e-5, 1e-7, 1e-7], false);
        let dashboard = service.get_dashboard(1, true).await.unwrap();

        assert_eq!(dashboard.entries.len(), 5);
        assert_eq!(dashboard.latest_flux, 1e-7);
        assert_eq!(dashboard.class, "NOMINAL");
        assert_eq!(dashboard.color, "green");
        assert_eq!(dashboard.period_max, 1e-5);
        assert!(dashboard.alert);
    }

    #[tokio::test]
    async fn test_empty_upstream_raised_before_windowing() {
        let service = service(Vec::new(), false);
        assert!(matches!(
            service.get_dashboard(24, true).await,
            Err(TelemetryError::EmptyUpstream)
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_carries_cause() {
        let service = service(Vec::new(), true);
        match service.get_dashboard(24, true).await {
            Err(TelemetryError::FetchFailed { source }) => {
                assert!(source.to_string().contains("connection refused"));
            }
            other => panic!("expected FetchFailed, got {:?}", other.map(|d| d.class)),
        }
    }

    #[tokio::test]
    async fn test_log_scale_flag_is_passed_through() {
        let service = service(vec![1e-7], false);
        let dashboard = service.get_dashboard(24, false).await.unwrap();
        assert!(!dashboard.log_scale);
        assert_eq!(dashboard.entries.len(), 1);
    }
}

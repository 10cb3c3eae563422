// NOAA SWPC GOES X-ray flux repository
use crate::application::flux_repository::FluxRepository;
use crate::domain::reading::{FLARE_CHANNEL, FluxReading, FluxSeries};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SwpcRepository {
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct XrayRecord {
    time_tag: String,
    energy: String,
    flux: FluxValue,
}

/// The feed has emitted flux both as a JSON number and as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FluxValue {
    Number(f64),
    Text(String),
}

impl FluxValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            FluxValue::Number(n) => Some(*n),
            FluxValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl SwpcRepository {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { url, client })
    }

    /// Keep only flare-channel records with a parseable timestamp and flux;
    /// the series constructor restores ascending time order.
    fn to_series(records: Vec<XrayRecord>) -> FluxSeries {
        let mut readings = Vec::new();

        for record in records {
            if record.energy != FLARE_CHANNEL {
                continue;
            }

            let Some(flux) = record.flux.as_f64() else {
                tracing::warn!("discarding record with unparseable flux at {}", record.time_tag);
                continue;
            };

            match chrono::DateTime::parse_from_rfc3339(&record.time_tag) {
                Ok(time) => readings.push(FluxReading::new(time.with_timezone(&Utc), flux)),
                Err(e) => {
                    tracing::warn!("discarding record with bad time_tag {}: {}", record.time_tag, e);
                }
            }
        }

        FluxSeries::new(readings)
    }
}

#[async_trait]
impl FluxRepository for SwpcRepository {
    async fn fetch_series(&self) -> Result<FluxSeries> {
        tracing::debug!("fetching flux data from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to the SWPC feed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("SWPC request failed with status {}: {}", status, body);
        }

        let records = response
            .json::<Vec<XrayRecord>>()
            .await
            .context("Failed to parse SWPC response")?;

        let series = Self::to_series(records);
        tracing::debug!("fetched {} flare-channel readings", series.len());

        Ok(series)
    }
}

//! OpenWeatherMap air pollution client.

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use tracing::{error, info};

use crate::error::reason_phrase;
use crate::models::{AirPollutionResponse, AirQualityQuery, AirQualityReport};
use crate::{Error, Result};

const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";

/// Raw upstream reply, before status and shape checks.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

/// Source of air pollution data for a coordinate pair.
#[async_trait]
pub trait AirPollutionSource: Send + Sync {
    /// Issue one request upstream. Errors only on transport failure.
    async fn fetch(&self, lat: &str, lon: &str, api_key: &str) -> Result<UpstreamReply>;
}

/// Client for the OpenWeatherMap air pollution API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full URL of the air pollution endpoint, without query parameters.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, AIR_POLLUTION_PATH)
    }

    /// Build the upstream GET. Coordinates are forwarded as given.
    pub fn request(&self, lat: &str, lon: &str, api_key: &str) -> Result<Request> {
        Ok(self
            .http
            .get(self.endpoint())
            .query(&[("lat", lat), ("lon", lon), ("appid", api_key)])
            .build()?)
    }
}

#[async_trait]
impl AirPollutionSource for OpenWeatherClient {
    async fn fetch(&self, lat: &str, lon: &str, api_key: &str) -> Result<UpstreamReply> {
        let request = self.request(lat, lon, api_key)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(UpstreamReply { status, body })
    }
}

/// Check the upstream status and decode the body into a report.
pub fn decode_reply(
    reply: UpstreamReply,
    city: &str,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<AirQualityReport> {
    if !reply.status.is_success() {
        error!(
            "OpenWeatherMap API error: {} {}",
            reply.status.as_u16(),
            reason_phrase(&reply.status)
        );
        return Err(Error::Upstream(reply.status));
    }

    let parsed: AirPollutionResponse = serde_json::from_str(&reply.body)
        .map_err(|e| Error::UpstreamShape(e.to_string()))?;

    AirQualityReport::from_upstream(parsed, city, now)
}

/// Fetch current air quality for a query and shape it for the caller.
pub async fn fetch_report(
    source: &dyn AirPollutionSource,
    query: &AirQualityQuery,
    api_key: &str,
) -> Result<AirQualityReport> {
    info!(
        "Fetching air quality data for {} ({}, {})",
        query.city.as_deref().unwrap_or("unknown city"),
        query.lat,
        query.lon
    );

    let reply = source.fetch(&query.lat, &query.lon, api_key).await?;
    let report = decode_reply(reply, query.display_city(), chrono::Utc::now())?;

    info!(
        "Successfully fetched data for {}: AQI {}",
        query.city.as_deref().unwrap_or("unknown city"),
        report.aqi
    );

    Ok(report)
}

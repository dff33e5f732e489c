//! Shared data models.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use lambda_http::aws_lambda_events::query_map::QueryMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// City shown when the caller does not name one.
pub const UNKNOWN_CITY: &str = "Unknown";

/// Pollutant name to concentration (μg/m³), ordered by name.
pub type Components = BTreeMap<String, serde_json::Number>;

/// Inbound query: `?lat=..&lon=..&city=..`.
///
/// Coordinates are kept as the caller sent them and forwarded without
/// numeric validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirQualityQuery {
    pub lat: String,
    pub lon: String,
    pub city: Option<String>,
}

impl AirQualityQuery {
    /// Extract the query from request parameters.
    pub fn from_params(params: &QueryMap) -> Result<Self> {
        let non_empty = |name: &str| {
            params
                .first(name)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        match (non_empty("lat"), non_empty("lon")) {
            (Some(lat), Some(lon)) => Ok(Self {
                lat,
                lon,
                city: non_empty("city"),
            }),
            _ => Err(Error::MissingCoordinates),
        }
    }

    /// City name for the response, `"Unknown"` when absent.
    pub fn display_city(&self) -> &str {
        self.city.as_deref().unwrap_or(UNKNOWN_CITY)
    }
}

/// Body of `GET /data/2.5/air_pollution`.
#[derive(Debug, Deserialize)]
pub struct AirPollutionResponse {
    pub list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AirPollutionEntry {
    pub main: AirPollutionMain,
    pub components: Components,
}

#[derive(Debug, Deserialize)]
pub struct AirPollutionMain {
    pub aqi: u32,
}

/// Response payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityReport {
    pub aqi: u32,
    pub components: Components,
    pub timestamp: String,
    pub city: String,
}

impl AirQualityReport {
    /// Build the report from the first upstream entry.
    pub fn from_upstream(
        response: AirPollutionResponse,
        city: &str,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let entry = response
            .list
            .into_iter()
            .next()
            .ok_or_else(|| Error::UpstreamShape("list is empty".to_string()))?;

        Ok(Self {
            aqi: entry.main.aqi,
            components: entry.components,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            city: city.to_string(),
        })
    }
}

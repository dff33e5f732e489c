//! Air Quality Lambda - Proxies current air pollution data from OpenWeatherMap.
//!
//! Endpoints:
//! - GET /?lat={lat}&lon={lon}&city={city} - Current AQI and pollutant components
//! - OPTIONS / - CORS preflight

use lambda_http::http::Method;
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use shared::http::{empty_response, error_response, json_response};
use shared::openweather::fetch_report;
use shared::{AirPollutionSource, AirQualityQuery, AirQualityReport, Config, OpenWeatherClient};
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    config: Config,
    source: Arc<dyn AirPollutionSource>,
}

impl AppState {
    fn new(config: Config) -> Self {
        let source = Arc::new(OpenWeatherClient::new(config.openweather_base_url.clone()));
        Self { config, source }
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    if event.method() == Method::OPTIONS {
        return empty_response(200);
    }

    match air_quality(&state, &event).await {
        Ok(report) => json_response(200, &report),
        Err(e) => {
            if e.is_internal() {
                error!("Error in air-quality function: {}", e);
            }
            error_response(&e)
        }
    }
}

async fn air_quality(state: &AppState, event: &Request) -> shared::Result<AirQualityReport> {
    if event.method() != Method::GET {
        return Err(shared::Error::MethodNotAllowed);
    }

    let query = AirQualityQuery::from_params(&event.query_string_parameters())?;

    let api_key = state.config.api_key().ok_or_else(|| {
        error!("OPENWEATHER_API_KEY environment variable is not set");
        shared::Error::MissingApiKey
    })?;

    fetch_report(state.source.as_ref(), &query, api_key).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new(Config::from_env()));

    run(service_fn(move |event| {
        let state = state.clone();
        async move { handler(state, event).await }
    }))
    .await
}

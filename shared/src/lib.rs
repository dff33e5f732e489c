//! Shared library for the air quality Lambda.
//!
//! This crate provides configuration, error types, response helpers and the
//! OpenWeatherMap client used by the `air_quality` function.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod openweather;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{AirQualityQuery, AirQualityReport};
pub use openweather::{AirPollutionSource, OpenWeatherClient, UpstreamReply};

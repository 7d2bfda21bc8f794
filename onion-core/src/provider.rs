use crate::{
    config::Config,
    model::{ForecastSummary, Intensity, Terrain, round1},
    provider::{openweather::OpenWeatherProvider, weatherapi::WeatherApiProvider},
};
use anyhow::Result;
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod openweather;
pub mod weatherapi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    WeatherApi,
    OpenWeather,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::WeatherApi => "weatherapi",
            ProviderId::OpenWeather => "openweather",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::WeatherApi, ProviderId::OpenWeather]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "weatherapi" => Ok(ProviderId::WeatherApi),
            "openweather" => Ok(ProviderId::OpenWeather),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: weatherapi, openweather."
            )),
        }
    }
}

/// What the optimizer needs to know about the planned ride before the
/// forecast exists.
#[derive(Debug, Clone)]
pub struct RideRequest {
    pub location: String,
    pub hours: u32,
    pub terrain: Terrain,
    pub intensity: Intensity,
}

/// Upstream weather source. Implementations fetch an hourly forecast and
/// reduce the next `hours` of it to a [`ForecastSummary`].
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn forecast(&self, request: &RideRequest) -> Result<ForecastSummary>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> Result<Box<dyn ForecastProvider>> {
    let api_key = config.provider_api_key(id).ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for provider '{id}'.\n\
                 Hint: run `onion configure {id}` and enter your API key."
        )
    })?;

    let boxed: Box<dyn ForecastProvider> = match id {
        ProviderId::WeatherApi => Box::new(WeatherApiProvider::new(api_key.to_owned())),
        ProviderId::OpenWeather => Box::new(OpenWeatherProvider::new(api_key.to_owned())),
    };

    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}

/// One forecast hour after provider-specific decoding; units are °C, km/h,
/// percent and mm regardless of the upstream wire format.
#[derive(Debug, Clone)]
pub(crate) struct HourSample {
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub wind_kph: f64,
    pub rain_prob_pct: f64,
    pub precip_mm: f64,
    pub is_night: bool,
    pub condition: String,
}

/// Reduce the ride window to a summary: worst case for rain and wind,
/// extremes for temperature, condition text from the first hour.
pub(crate) fn summarize_window(
    samples: &[HourSample],
    request: &RideRequest,
) -> Result<ForecastSummary> {
    let first = samples
        .first()
        .ok_or_else(|| anyhow::anyhow!("forecast response contained no hours for the ride window"))?;

    let fold = |init: f64, pick: fn(f64, f64) -> f64, get: fn(&HourSample) -> f64| {
        samples.iter().fold(init, |acc, s| pick(acc, get(s)))
    };

    Ok(ForecastSummary {
        duration_hours: f64::from(request.hours),
        temp_min: round1(fold(f64::INFINITY, f64::min, |s| s.temp_c)),
        temp_max: round1(fold(f64::NEG_INFINITY, f64::max, |s| s.temp_c)),
        temp_min_felt: fold(f64::INFINITY, f64::min, |s| s.feels_like_c),
        precipitation_prob: fold(0.0, f64::max, |s| s.rain_prob_pct),
        precipitation_mm: round1(samples.iter().map(|s| s.precip_mm).sum()),
        wind_max: round1(fold(0.0, f64::max, |s| s.wind_kph)),
        is_night: samples.iter().any(|s| s.is_night),
        condition: first.condition.clone(),
        terrain: request.terrain,
        intensity: request.intensity,
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Timelike};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    model::ForecastSummary,
    provider::{HourSample, RideRequest, summarize_window, truncate_body},
};

use super::ForecastProvider;

/// WeatherAPI.com hourly forecast, one day ahead.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }

    async fn fetch_day(&self, location: &str) -> Result<WaForecastResponse> {
        let url = "https://api.weatherapi.com/v1/forecast.json";

        let res = self
            .http
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", location),
                ("days", "1"),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (forecast)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "WeatherAPI forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse WeatherAPI forecast JSON")
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    temp_c: f64,
    windchill_c: f64,
    wind_kph: f64,
    chance_of_rain: f64,
    precip_mm: f64,
    is_day: u8,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    forecast: WaForecast,
}

/// Hour-of-day from the location's "YYYY-MM-DD HH:MM" local time.
fn local_hour(localtime: &str) -> Result<usize> {
    let parsed = NaiveDateTime::parse_from_str(localtime, "%Y-%m-%d %H:%M")
        .with_context(|| format!("Failed to parse WeatherAPI localtime '{localtime}'"))?;
    Ok(parsed.hour() as usize)
}

/// Slice the next `span` hours of today's hourly forecast, clamped to
/// midnight, and convert them into provider-neutral samples.
fn ride_window(parsed: &WaForecastResponse, span: u32) -> Result<Vec<HourSample>> {
    let day = parsed
        .forecast
        .forecastday
        .first()
        .ok_or_else(|| anyhow!("WeatherAPI response contained no forecastday data"))?;

    let start = local_hour(&parsed.location.localtime)?;
    let end = (start + span as usize).min(day.hour.len());

    let samples = day.hour[start.min(day.hour.len())..end]
        .iter()
        .map(|h| HourSample {
            temp_c: h.temp_c,
            feels_like_c: h.windchill_c,
            wind_kph: h.wind_kph,
            rain_prob_pct: h.chance_of_rain,
            precip_mm: h.precip_mm,
            is_night: h.is_day == 0,
            condition: h.condition.text.clone(),
        })
        .collect();

    Ok(samples)
}

#[async_trait]
impl ForecastProvider for WeatherApiProvider {
    async fn forecast(&self, request: &RideRequest) -> Result<ForecastSummary> {
        let parsed = self.fetch_day(&request.location).await?;
        tracing::debug!(
            location = %parsed.location.name,
            localtime = %parsed.location.localtime,
            "fetched weatherapi forecast"
        );

        let samples = ride_window(&parsed, request.hours)?;
        summarize_window(&samples, request)
    }
}

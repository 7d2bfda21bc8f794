use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    model::ForecastSummary,
    provider::{HourSample, RideRequest, summarize_window, truncate_body},
};

use super::ForecastProvider;

const ENTRY_SPAN_SECS: i64 = 3 * 3600;

/// OpenWeather 5-day/3-hour forecast, reduced to the ride window.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn fetch_forecast(&self, location: &str) -> Result<OwForecastResponse> {
        let url = "https://api.openweathermap.org/data/2.5/forecast";

        let res = self
            .http
            .get(url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (5-day forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body).context("Failed to parse OpenWeather forecast JSON")
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize, Default)]
struct OwRain {
    #[serde(rename = "3h", default)]
    three_hours: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    pod: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    /// Probability of precipitation, 0..1.
    #[serde(default)]
    pop: f64,
    #[serde(default)]
    rain: OwRain,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn to_sample(entry: &OwForecastEntry) -> HourSample {
    HourSample {
        temp_c: entry.main.temp,
        feels_like_c: entry.main.feels_like,
        // OpenWeather reports m/s; the model works in km/h.
        wind_kph: entry.wind.speed * 3.6,
        rain_prob_pct: entry.pop * 100.0,
        precip_mm: entry.rain.three_hours,
        is_night: entry.sys.pod == "n",
        condition: entry
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_else(|| "Unknown".to_string()),
    }
}

/// Entries overlapping [now, now + span). The forecast is 3-hourly, so an
/// entry counts if any part of its slot falls inside the ride window; when
/// the window misses every slot, fall back to the closest entry.
fn ride_window(entries: &[OwForecastEntry], now_ts: i64, span_hours: u32) -> Vec<HourSample> {
    let window_end = now_ts + i64::from(span_hours) * 3600;

    let picked: Vec<HourSample> = entries
        .iter()
        .filter(|e| e.dt + ENTRY_SPAN_SECS > now_ts && e.dt < window_end)
        .map(to_sample)
        .collect();

    if !picked.is_empty() {
        return picked;
    }

    entries
        .iter()
        .min_by_key(|e| (e.dt - now_ts).abs())
        .map(to_sample)
        .into_iter()
        .collect()
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn forecast(&self, request: &RideRequest) -> Result<ForecastSummary> {
        let parsed = self.fetch_forecast(&request.location).await?;
        tracing::debug!(
            city = %parsed.city.name,
            entries = parsed.list.len(),
            "fetched openweather forecast"
        );

        let samples = ride_window(&parsed.list, Utc::now().timestamp(), request.hours);
        summarize_window(&samples, request)
    }
}

use serde::Serialize;
use thiserror::Error;

/// Terrain profile of the planned ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Terrain {
    Flat,
    Hilly,
    Mountain,
    Alpine,
}

#[derive(Debug, Error)]
#[error("unknown terrain '{0}'; expected flat, hilly, mountain or alpine")]
pub struct ParseTerrainError(String);

impl Terrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Flat => "flat",
            Terrain::Hilly => "hilly",
            Terrain::Mountain => "mountain",
            Terrain::Alpine => "alpine",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Terrain {
    type Error = ParseTerrainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "flat" => Ok(Terrain::Flat),
            "hilly" => Ok(Terrain::Hilly),
            "mountain" => Ok(Terrain::Mountain),
            "alpine" => Ok(Terrain::Alpine),
            _ => Err(ParseTerrainError(value.to_string())),
        }
    }
}

/// How hard the rider intends to push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Intensity {
    Light,
    Medium,
    Tempo,
    Extreme,
}

#[derive(Debug, Error)]
#[error("unknown intensity '{0}'; expected light, medium, tempo or extreme")]
pub struct ParseIntensityError(String);

impl Intensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::Tempo => "tempo",
            Intensity::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Intensity {
    type Error = ParseIntensityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "light" => Ok(Intensity::Light),
            "medium" => Ok(Intensity::Medium),
            "tempo" => Ok(Intensity::Tempo),
            "extreme" => Ok(Intensity::Extreme),
            _ => Err(ParseIntensityError(value.to_string())),
        }
    }
}

/// The ride-condition record the optimizer scores against.
///
/// Temperatures are the effective (terrain/intensity-adjusted) band from
/// the forecast collaborator; the core never derives them itself. No
/// validation happens here: nonsensical inputs are the caller's problem
/// and produce well-defined nonsense scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RideConditions {
    pub temp_min: f64,
    pub temp_max: f64,
    /// Precipitation probability in percent, 0–100.
    pub rain_prob: f64,
    /// Maximum wind speed over the ride window, km/h.
    pub wind_max: f64,
    pub duration_hours: f64,
}

/// Aggregated forecast for the next `duration_hours` at the ride location.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastSummary {
    pub duration_hours: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Lowest wind-chill temperature in the window.
    pub temp_min_felt: f64,
    /// Worst-case rain chance in the window, percent.
    pub precipitation_prob: f64,
    /// Total expected precipitation over the window, mm.
    pub precipitation_mm: f64,
    pub wind_max: f64,
    pub is_night: bool,
    pub condition: String,
    pub terrain: Terrain,
    pub intensity: Intensity,
}

impl ForecastSummary {
    /// Felt temperature band for cycling: effort warms the top of the band
    /// on climbs, altitude and descents cool the bottom.
    pub fn effective_temp_range(&self) -> (f64, f64) {
        let mut t_up = self.temp_max;
        let mut t_down = self.temp_min_felt;

        t_up += match self.intensity {
            Intensity::Light => 0.0,
            Intensity::Medium => 1.5,
            Intensity::Tempo => 3.0,
            Intensity::Extreme => 5.0,
        };

        t_down -= match self.terrain {
            Terrain::Flat => 0.0,
            Terrain::Hilly => 1.0,
            Terrain::Mountain => 5.0,
            Terrain::Alpine => 9.0,
        };

        (round1(t_down), round1(t_up))
    }

    /// Bridge to the record the optimizer consumes.
    pub fn ride_conditions(&self) -> RideConditions {
        let (temp_min, temp_max) = self.effective_temp_range();
        RideConditions {
            temp_min,
            temp_max,
            rain_prob: self.precipitation_prob,
            wind_max: self.wind_max,
            duration_hours: self.duration_hours,
        }
    }

    /// One situational piece of advice, first matching rule wins.
    pub fn pro_tip(&self) -> &'static str {
        if self.is_night {
            "It might get dark - don't forget your lights!"
        } else if self.temp_max > 25.0 {
            "It might get hot - stay hydrated!"
        } else if self.temp_min < 10.0 {
            "If you tend to get cold hands & feet - bring some extra gloves and socks!"
        } else if matches!(self.intensity, Intensity::Tempo | Intensity::Extreme)
            || self.duration_hours > 2.0
        {
            "It will be a tough ride - don't forget some fuel!"
        } else if matches!(self.terrain, Terrain::Mountain | Terrain::Alpine) {
            "Enjoy the view! (And bring a wind jacket!)"
        } else {
            "Enjoy the ride!"
        }
    }
}

pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

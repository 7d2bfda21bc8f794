use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};

use onion_core::{
    BodyPart, Config, Intensity, ProviderId, RideRequest, Selection, SyntheticItem, Terrain,
    provider::{default_provider_from_config, provider_from_config},
    recommend_outfit, reference_wardrobe,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "onion", version, about = "Cycling outfit recommender")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a weather provider.
    Configure {
        /// Provider short name, e.g. "weatherapi" or "openweather".
        provider: String,
    },

    /// Recommend an outfit for a ride.
    Ride {
        /// City or place; falls back to `default_location` from the config.
        location: Option<String>,

        /// Ride duration in hours.
        #[arg(long, default_value_t = 2)]
        hours: u32,

        /// flat, hilly, mountain or alpine.
        #[arg(long, default_value = "flat")]
        terrain: String,

        /// light, medium, tempo or extreme.
        #[arg(long, default_value = "medium")]
        intensity: String,

        /// Override the configured default weather provider.
        #[arg(long)]
        provider: Option<String>,

        /// Print the forecast and outfit as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the clothing catalog grouped by body part.
    Wardrobe,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Ride { location, hours, terrain, intensity, provider, json } => {
                ride(location, hours, &terrain, &intensity, provider.as_deref(), json).await
            }
            Command::Wardrobe => {
                print_wardrobe();
                Ok(())
            }
        }
    }
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;

    let api_key = inquire::Password::new(&format!("API key for {id}:"))
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    if api_key.trim().is_empty() {
        return Err(anyhow!("API key must not be empty"));
    }

    let mut config = Config::load()?;
    config.upsert_provider_api_key(id, api_key.trim().to_string());
    config.save()?;

    println!("Saved credentials for '{id}' to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn ride(
    location: Option<String>,
    hours: u32,
    terrain: &str,
    intensity: &str,
    provider: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;

    let location = location.or_else(|| config.default_location.clone()).ok_or_else(|| {
        anyhow!(
            "No location given.\n\
             Hint: pass one (`onion ride Freiburg`) or set `default_location` in the config."
        )
    })?;

    let terrain = Terrain::try_from(terrain)?;
    let intensity = Intensity::try_from(intensity)?;

    let provider = match provider {
        Some(name) => provider_from_config(ProviderId::try_from(name)?, &config)?,
        None => default_provider_from_config(&config)?,
    };

    let request = RideRequest { location: location.clone(), hours, terrain, intensity };

    tracing::info!(%location, hours, "fetching forecast");
    let summary = provider.forecast(&request).await?;

    let cond = summary.ride_conditions();
    let outfit = recommend_outfit(&reference_wardrobe(), &cond);

    if json {
        let payload = serde_json::json!({
            "location": location,
            "forecast": summary,
            "conditions": cond,
            "outfit": outfit,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Recommended outfit for the ride in {location}");
    println!("Terrain: {terrain} | Intensity: {intensity} | Duration: {hours} h");
    println!();
    println!("  {}", summary.condition);
    println!("  Temperature:       {:.1} - {:.1} °C", summary.temp_min, summary.temp_max);
    println!("  Felt temperature:  {:.1} - {:.1} °C", cond.temp_min, cond.temp_max);
    println!("  Wind:              {:.0} km/h", summary.wind_max);
    println!("  Precipitation:     {:.0}% ({:.1} mm)", summary.precipitation_prob, summary.precipitation_mm);
    println!();

    for (part, selection) in &outfit {
        match selection {
            Selection::Outfit(item) => {
                println!("{part}: {}", item.name);
                println!("    {}", item_details(item));
            }
            Selection::Unavailable => {
                println!("{part}: no suitable outfit in the wardrobe");
            }
        }
    }

    println!();
    println!("Bonus tip: {}", summary.pro_tip());
    Ok(())
}

fn item_details(item: &SyntheticItem) -> String {
    let mut details = format!("comfort {:.0} to {:.0} °C", item.comfort_min, item.comfort_max);
    if item.windproof {
        details.push_str(", windproof");
    }
    if item.waterproof {
        details.push_str(", waterproof");
    }
    if item.removable {
        details.push_str(", removable");
    }
    details
}

fn print_wardrobe() {
    let wardrobe = reference_wardrobe();

    for &part in BodyPart::all() {
        println!("{part}:");
        for item in wardrobe.items_for_part(part) {
            let mut line = format!("  {} ({})", item.name, item.layer.as_str());
            if item.comfort_max != 0.0 {
                line.push_str(&format!(", comfort {:.0} to {:.0} °C", item.comfort_min, item.comfort_max));
            }
            if item.windproof {
                line.push_str(", windproof");
            }
            if item.waterproof {
                line.push_str(", waterproof");
            }
            if item.removable {
                line.push_str(", removable");
            }
            println!("{line}");
        }
        println!();
    }
}

//! Core library for the `onion` cycling outfit recommender.
//!
//! This crate defines:
//! - The clothing catalog and layering rules
//! - Combination generation, composition and discomfort scoring
//! - The per-body-part outfit optimizer
//! - Abstraction over weather forecast providers
//! - Configuration & credentials handling
//!
//! It is used by `onion-cli`, but can also be reused by other binaries or services.
//!
//! The optimizer itself is pure and synchronous: the wardrobe is immutable
//! shared state, and every request recomputes its combinations from
//! scratch, so a shared reference can be used from many threads at once.

pub mod clothing;
pub mod combo;
pub mod config;
pub mod model;
pub mod outfit;
pub mod provider;
pub mod score;
pub mod wardrobe;

pub use clothing::{BodyPart, ClothingItem, LayerRole};
pub use combo::{Combination, SyntheticItem};
pub use config::{Config, ProviderConfig};
pub use model::{ForecastSummary, Intensity, RideConditions, Terrain};
pub use outfit::{Selection, recommend_outfit};
pub use provider::{ForecastProvider, ProviderId, RideRequest};
pub use wardrobe::{Wardrobe, reference_wardrobe};

use serde::Serialize;

use crate::clothing::{BodyPart, ClothingItem, LayerRole};

/// Summed wind contribution at which a layering counts as fully windproof.
pub const WINDPROOF_BOOST_THRESHOLD: f64 = 0.9;

// Fallback comfort band when the outer layer's own value is the 0.0
// sentinel (a garment with no stated range, e.g. bare-skin proxies).
const FALLBACK_COMFORT_MIN: f64 = 15.0;
const FALLBACK_COMFORT_MAX: f64 = 35.0;

/// A rule-valid selection of items for one body part, held sorted
/// inner to outer.
#[derive(Debug, Clone)]
pub struct Combination<'a> {
    items: Vec<&'a ClothingItem>,
}

impl<'a> Combination<'a> {
    pub fn new(mut items: Vec<&'a ClothingItem>) -> Self {
        // Stable sort keeps catalog order among accessories.
        items.sort_by_key(|i| i.layer);
        Self { items }
    }

    pub fn items(&self) -> &[&'a ClothingItem] {
        &self.items
    }

    /// Fold the layering into one synthetic garment.
    ///
    /// The outermost item seeds the comfort band and flags; every item
    /// underneath shifts the band, adds its wind contribution and
    /// complexity, and ORs its flags in. Pure and deterministic.
    pub fn compose(&self) -> SyntheticItem {
        let outer = self.items[self.items.len() - 1];

        let mut eff_min = fallback_if_unset(outer.comfort_min, FALLBACK_COMFORT_MIN);
        let mut eff_max = fallback_if_unset(outer.comfort_max, FALLBACK_COMFORT_MAX);
        let mut wind_boost = outer.wind_boost;
        let mut waterproof = outer.waterproof;
        let mut windproof = outer.windproof;
        let mut removable = outer.removable;
        let mut complexity = outer.complexity;

        for item in &self.items[..self.items.len() - 1] {
            eff_min += item.shift_min;
            eff_max += item.shift_max;
            wind_boost += item.wind_boost;
            waterproof = waterproof || item.waterproof;
            windproof = windproof || item.windproof;
            removable = removable || item.removable;
            complexity += item.complexity;
        }

        if wind_boost >= WINDPROOF_BOOST_THRESHOLD {
            windproof = true;
        }

        let name = self
            .items
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(" + ");

        SyntheticItem {
            name,
            body_part: outer.body_part,
            layer: outer.layer,
            comfort_min: eff_min,
            comfort_max: eff_max,
            wind_boost,
            waterproof,
            windproof,
            removable,
            complexity,
        }
    }
}

fn fallback_if_unset(value: f64, fallback: f64) -> f64 {
    if value == 0.0 { fallback } else { value }
}

/// The single-garment equivalent of a whole combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticItem {
    pub name: String,
    pub body_part: BodyPart,
    pub layer: LayerRole,
    pub comfort_min: f64,
    pub comfort_max: f64,
    pub wind_boost: f64,
    pub waterproof: bool,
    pub windproof: bool,
    pub removable: bool,
    pub complexity: f64,
}

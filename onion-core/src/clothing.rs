use serde::Serialize;

/// Body part a clothing item covers. Declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BodyPart {
    Head,
    Upper,
    Lower,
    Hands,
    Feet,
}

impl BodyPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Head => "Head",
            BodyPart::Upper => "Upper Body",
            BodyPart::Lower => "Lower Body",
            BodyPart::Hands => "Hands",
            BodyPart::Feet => "Feet",
        }
    }

    pub const fn all() -> &'static [BodyPart] {
        &[
            BodyPart::Head,
            BodyPart::Upper,
            BodyPart::Lower,
            BodyPart::Hands,
            BodyPart::Feet,
        ]
    }
}

impl std::fmt::Display for BodyPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of an item within a layered outfit, ordered inner to outer.
///
/// The ordinal drives both the sort order inside a combination and the
/// choice of the "outer baseline" when composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LayerRole {
    Accessory,
    Inner,
    Mid,
    Outer,
}

impl LayerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerRole::Accessory => "accessory",
            LayerRole::Inner => "inner",
            LayerRole::Mid => "mid",
            LayerRole::Outer => "outer",
        }
    }
}

/// Comfort minimum used when an item has no stated range as outer layer.
/// High on purpose: anything with a real range beats it on the cold term.
pub const COMFORT_MIN_UNRATED: f64 = 50.0;
/// Comfort maximum sentinel for items with no stated range as outer layer.
pub const COMFORT_MAX_UNRATED: f64 = 0.0;

/// One garment in the wardrobe.
///
/// `comfort_min`/`comfort_max` describe the temperature band where the item
/// is comfortable when worn as the outermost layer; they default to the
/// unrated sentinels. `shift_min`/`shift_max` are the deltas this item
/// applies to the outer layer's band when worn underneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothingItem {
    pub name: String,
    pub layer: LayerRole,
    pub body_part: BodyPart,
    pub comfort_min: f64,
    pub comfort_max: f64,
    pub shift_min: f64,
    pub shift_max: f64,
    /// Additive wind-resistance contribution; a layering summing to ~1
    /// counts as windproof even if no single item is.
    pub wind_boost: f64,
    pub waterproof: bool,
    pub windproof: bool,
    pub removable: bool,
    /// Bulk/effort of wearing the item; negative means it simplifies the
    /// outfit (e.g. plain socks).
    pub complexity: f64,
}

impl ClothingItem {
    pub fn new(name: &str, layer: LayerRole, body_part: BodyPart) -> Self {
        Self {
            name: name.to_string(),
            layer,
            body_part,
            comfort_min: COMFORT_MIN_UNRATED,
            comfort_max: COMFORT_MAX_UNRATED,
            shift_min: 0.0,
            shift_max: 0.0,
            wind_boost: 0.0,
            waterproof: false,
            windproof: false,
            removable: false,
            complexity: 1.0,
        }
    }

    // Chained setters so the catalog reads as a declarative table.

    pub fn comfort(mut self, min: f64, max: f64) -> Self {
        self.comfort_min = min;
        self.comfort_max = max;
        self
    }

    pub fn shift(mut self, min: f64, max: f64) -> Self {
        self.shift_min = min;
        self.shift_max = max;
        self
    }

    pub fn wind_boost(mut self, boost: f64) -> Self {
        self.wind_boost = boost;
        self
    }

    pub fn waterproof(mut self) -> Self {
        self.waterproof = true;
        self
    }

    pub fn windproof(mut self) -> Self {
        self.windproof = true;
        self
    }

    pub fn removable(mut self) -> Self {
        self.removable = true;
        self
    }

    pub fn complexity(mut self, cost: f64) -> Self {
        self.complexity = cost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_roles_are_ordered_inner_to_outer() {
        assert!(LayerRole::Accessory < LayerRole::Inner);
        assert!(LayerRole::Inner < LayerRole::Mid);
        assert!(LayerRole::Mid < LayerRole::Outer);
    }

    #[test]
    fn new_item_starts_with_unrated_comfort_band() {
        let item = ClothingItem::new("Arm Warmers", LayerRole::Accessory, BodyPart::Upper);

        assert_eq!(item.comfort_min, COMFORT_MIN_UNRATED);
        assert_eq!(item.comfort_max, COMFORT_MAX_UNRATED);
        assert!(!item.waterproof);
        assert_eq!(item.complexity, 1.0);
    }

    #[test]
    fn setters_compose() {
        let item = ClothingItem::new("Wind Jacket", LayerRole::Outer, BodyPart::Upper)
            .comfort(15.0, 20.0)
            .windproof()
            .removable()
            .complexity(1.0);

        assert_eq!(item.comfort_min, 15.0);
        assert!(item.windproof);
        assert!(item.removable);
        assert!(!item.waterproof);
    }

    #[test]
    fn body_part_display_names() {
        assert_eq!(BodyPart::Upper.to_string(), "Upper Body");
        assert_eq!(BodyPart::Head.to_string(), "Head");
        assert_eq!(BodyPart::all().len(), 5);
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::clothing::BodyPart;
use crate::combo::SyntheticItem;
use crate::model::RideConditions;
use crate::wardrobe::Wardrobe;

/// Outcome for one body part. A part without any valid combination gets an
/// explicit marker instead of being dropped from the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Selection {
    Outfit(SyntheticItem),
    Unavailable,
}

impl Selection {
    pub fn as_outfit(&self) -> Option<&SyntheticItem> {
        match self {
            Selection::Outfit(item) => Some(item),
            Selection::Unavailable => None,
        }
    }
}

/// Pick the minimum-discomfort outfit for every body part.
///
/// Ties on exactly equal scores go to the lower-complexity outfit, then to
/// the earlier combination in enumeration order.
pub fn recommend_outfit(
    wardrobe: &Wardrobe,
    cond: &RideConditions,
) -> BTreeMap<BodyPart, Selection> {
    let mut outfit = BTreeMap::new();

    for &part in BodyPart::all() {
        let mut best: Option<(f64, SyntheticItem)> = None;

        for combo in wardrobe.combinations_for_part(part) {
            let item = combo.compose();
            let score = item.discomfort(cond);

            let better = match &best {
                None => true,
                Some((best_score, best_item)) => {
                    score < *best_score
                        || (score == *best_score && item.complexity < best_item.complexity)
                }
            };
            if better {
                best = Some((score, item));
            }
        }

        let selection = match best {
            Some((score, item)) => {
                tracing::debug!(part = %part, name = %item.name, score, "selected outfit");
                Selection::Outfit(item)
            }
            None => {
                tracing::debug!(part = %part, "no valid combination");
                Selection::Unavailable
            }
        };
        outfit.insert(part, selection);
    }

    outfit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clothing::{ClothingItem, LayerRole};
    use crate::wardrobe::reference_wardrobe;

    fn mild_day() -> RideConditions {
        RideConditions {
            temp_min: 15.0,
            temp_max: 20.0,
            rain_prob: 0.0,
            wind_max: 5.0,
            duration_hours: 2.0,
        }
    }

    #[test]
    fn every_body_part_gets_a_selection() {
        let outfit = recommend_outfit(&reference_wardrobe(), &mild_day());

        assert_eq!(outfit.len(), BodyPart::all().len());
        for (part, selection) in &outfit {
            let item = selection
                .as_outfit()
                .unwrap_or_else(|| panic!("{part} should have an outfit"));
            assert_eq!(item.body_part, *part);
        }
    }

    #[test]
    fn selection_is_minimal_over_all_combinations() {
        let wardrobe = reference_wardrobe();
        let cond = RideConditions {
            temp_min: 0.0,
            temp_max: 5.0,
            rain_prob: 80.0,
            wind_max: 25.0,
            duration_hours: 3.0,
        };

        let outfit = recommend_outfit(&wardrobe, &cond);

        for &part in BodyPart::all() {
            let chosen = outfit[&part].as_outfit().expect("reference wardrobe covers all parts");
            let chosen_score = chosen.discomfort(&cond);

            for combo in wardrobe.combinations_for_part(part) {
                let score = combo.compose().discomfort(&cond);
                assert!(
                    chosen_score <= score,
                    "{part}: picked {chosen_score}, but a combo scores {score}"
                );
            }
        }
    }

    #[test]
    fn part_without_items_is_marked_unavailable() {
        let wardrobe = Wardrobe::new(vec![
            ClothingItem::new("Bare Head", LayerRole::Mid, BodyPart::Head).comfort(16.0, 40.0),
        ]);

        let outfit = recommend_outfit(&wardrobe, &mild_day());

        assert_eq!(outfit[&BodyPart::Hands], Selection::Unavailable);
        assert!(outfit[&BodyPart::Head].as_outfit().is_some());
    }

    #[test]
    fn equal_scores_prefer_the_simpler_outfit() {
        // Two identical gloves except for complexity; same score otherwise.
        let bulky = ClothingItem::new("Bulky Gloves", LayerRole::Mid, BodyPart::Hands)
            .comfort(10.0, 25.0)
            .complexity(2.0);
        let light = ClothingItem::new("Light Gloves", LayerRole::Mid, BodyPart::Hands)
            .comfort(10.0, 25.0)
            .complexity(1.0);
        let wardrobe = Wardrobe::new(vec![bulky, light]);

        let cond = mild_day();
        let outfit = recommend_outfit(&wardrobe, &cond);
        let picked = outfit[&BodyPart::Hands].as_outfit().unwrap();

        // Not a tie: complexity feeds the score. Verify minimality anyway,
        // then check a true tie via equal-complexity duplicates.
        assert_eq!(picked.name, "Light Gloves");

        let first = ClothingItem::new("First Gloves", LayerRole::Mid, BodyPart::Hands)
            .comfort(10.0, 25.0);
        let second = ClothingItem::new("Second Gloves", LayerRole::Mid, BodyPart::Hands)
            .comfort(10.0, 25.0);
        let wardrobe = Wardrobe::new(vec![first, second]);

        let outfit = recommend_outfit(&wardrobe, &cond);
        let picked = outfit[&BodyPart::Hands].as_outfit().unwrap();
        assert_eq!(picked.name, "First Gloves", "enumeration order breaks exact ties");
    }

    fn best_scores(cond: &RideConditions) -> BTreeMap<BodyPart, f64> {
        let outfit = recommend_outfit(&reference_wardrobe(), cond);
        outfit
            .iter()
            .map(|(part, sel)| (*part, sel.as_outfit().expect("covered part").discomfort(cond)))
            .collect()
    }

    #[test]
    fn mild_spring_day_stays_comfortable_everywhere() {
        let cond = RideConditions {
            temp_min: 15.0,
            temp_max: 20.0,
            rain_prob: 0.0,
            wind_max: 5.0,
            duration_hours: 2.0,
        };

        for (part, score) in best_scores(&cond) {
            assert!(score < 40.0, "{part} outfit too uncomfortable for a mild spring day: {score}");
        }
    }

    #[test]
    fn winter_ride_still_finds_wearable_combos() {
        let cond = RideConditions {
            temp_min: 0.0,
            temp_max: 5.0,
            rain_prob: 80.0,
            wind_max: 25.0,
            duration_hours: 3.0,
        };

        for (part, score) in best_scores(&cond) {
            assert!(score < 120.0, "{part} outfit too uncomfortable for winter: {score}");
        }
    }

    #[test]
    fn hot_summer_ride_penalizes_overdressing_but_stays_viable() {
        let cond = RideConditions {
            temp_min: 28.0,
            temp_max: 35.0,
            rain_prob: 0.0,
            wind_max: 10.0,
            duration_hours: 2.0,
        };

        for (part, score) in best_scores(&cond) {
            assert!(score < 60.0, "{part} outfit too uncomfortable for a hot summer day: {score}");
        }
    }

    #[test]
    fn rainy_ride_prefers_waterproof_upper() {
        let cond = RideConditions {
            temp_min: 8.0,
            temp_max: 12.0,
            rain_prob: 90.0,
            wind_max: 20.0,
            duration_hours: 2.0,
        };

        let outfit = recommend_outfit(&reference_wardrobe(), &cond);
        let upper = outfit[&BodyPart::Upper].as_outfit().unwrap();

        // 90% rain costs 67.5 points unless waterproof; the winner must
        // shrug it off.
        assert!(upper.waterproof, "picked {} for a rainy ride", upper.name);
    }
}

//! Discomfort scoring for composed outfits. Lower is better, no upper
//! bound, and negative totals are legal (a removable low-bulk item with an
//! adequate band scores below zero).

use crate::combo::SyntheticItem;
use crate::model::RideConditions;

const RAIN_WEIGHT: f64 = 0.75;
const WIND_WEIGHT: f64 = 0.5;
const COMPLEXITY_WEIGHT: f64 = 5.0;
const REMOVABLE_BONUS: f64 = -4.5;

impl SyntheticItem {
    /// Estimate how uncomfortable this outfit is for the given conditions.
    ///
    /// The cold and warm branches are mutually exclusive: when the cold
    /// term triggers, the warm term is skipped. A single comfort interval
    /// can never trip both, so keep the sequential check as-is.
    pub fn discomfort(&self, cond: &RideConditions) -> f64 {
        let mut cold_penalty = 0.0;
        let mut warm_penalty = 0.0;

        if cond.temp_min < self.comfort_min {
            cold_penalty = (self.comfort_min - cond.temp_min).powi(2);
        } else if cond.temp_max > self.comfort_max {
            warm_penalty = (cond.temp_max - self.comfort_max).powi(2);
        }

        // Longer rides amplify cold exposure; overheating risk does not
        // scale with duration in this model.
        cold_penalty *= 0.33 + cond.duration_hours / 3.0;

        let rain_penalty = if self.waterproof { 0.0 } else { RAIN_WEIGHT * cond.rain_prob };
        let wind_penalty = if self.windproof { 0.0 } else { WIND_WEIGHT * cond.wind_max };

        let complexity_penalty = COMPLEXITY_WEIGHT * self.complexity;
        let remove_bonus = if self.removable { REMOVABLE_BONUS } else { 0.0 };

        cold_penalty + warm_penalty + rain_penalty + wind_penalty + complexity_penalty
            + remove_bonus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clothing::{BodyPart, LayerRole};

    fn item(min: f64, max: f64) -> SyntheticItem {
        SyntheticItem {
            name: "Test Kit".to_string(),
            body_part: BodyPart::Upper,
            layer: LayerRole::Outer,
            comfort_min: min,
            comfort_max: max,
            wind_boost: 0.0,
            waterproof: false,
            windproof: false,
            removable: false,
            complexity: 0.0,
        }
    }

    fn conditions() -> RideConditions {
        RideConditions {
            temp_min: 10.0,
            temp_max: 20.0,
            rain_prob: 0.0,
            wind_max: 0.0,
            duration_hours: 2.0,
        }
    }

    #[test]
    fn winter_jacket_scenario_matches_hand_computation() {
        let mut jacket = item(5.0, 15.0);
        jacket.waterproof = true;
        jacket.windproof = true;
        jacket.complexity = 2.0;

        let cond = RideConditions {
            temp_min: -2.0,
            temp_max: 8.0,
            rain_prob: 0.0,
            wind_max: 10.0,
            duration_hours: 2.0,
        };

        // cold = (5 - (-2))^2 * (0.33 + 2/3), complexity = 5 * 2.
        let expected = 49.0 * (0.33 + 2.0 / 3.0) + 10.0;
        assert!((jacket.discomfort(&cond) - expected).abs() < 1e-9);
        assert!((expected - 58.836_666).abs() < 1e-3);
    }

    #[test]
    fn inside_the_band_costs_nothing_thermally() {
        let kit = item(8.0, 22.0);
        assert_eq!(kit.discomfort(&conditions()), 0.0);
    }

    #[test]
    fn cold_penalty_grows_strictly_with_duration() {
        let kit = item(15.0, 25.0); // temp_min 10 < comfort_min 15
        let mut cond = conditions();

        cond.duration_hours = 1.0;
        let short = kit.discomfort(&cond);
        cond.duration_hours = 3.0;
        let medium = kit.discomfort(&cond);
        cond.duration_hours = 6.0;
        let long = kit.discomfort(&cond);

        assert!(short < medium && medium < long);
    }

    #[test]
    fn warm_penalty_ignores_duration() {
        let kit = item(0.0, 15.0); // temp_max 20 > comfort_max 15
        let mut cond = conditions();

        cond.duration_hours = 1.0;
        let short = kit.discomfort(&cond);
        cond.duration_hours = 6.0;
        let long = kit.discomfort(&cond);

        assert_eq!(short, long);
        assert_eq!(short, 25.0); // (20 - 15)^2
    }

    #[test]
    fn cold_branch_shadows_the_warm_branch() {
        // Inverted band: both conditions would hold, only cold may fire.
        let kit = item(25.0, 5.0);
        let cond = conditions();

        let expected_cold = (25.0 - 10.0_f64).powi(2) * (0.33 + 2.0 / 3.0);
        assert!((kit.discomfort(&cond) - expected_cold).abs() < 1e-9);
    }

    #[test]
    fn waterproof_score_is_invariant_to_rain() {
        let mut kit = item(8.0, 22.0);
        kit.waterproof = true;
        let mut cond = conditions();

        cond.rain_prob = 0.0;
        let dry = kit.discomfort(&cond);
        cond.rain_prob = 100.0;
        let wet = kit.discomfort(&cond);
        assert_eq!(dry, wet);

        kit.waterproof = false;
        assert_eq!(kit.discomfort(&cond), dry + 75.0);
    }

    #[test]
    fn windproof_score_is_invariant_to_wind() {
        let mut kit = item(8.0, 22.0);
        kit.windproof = true;
        let mut cond = conditions();

        cond.wind_max = 0.0;
        let calm = kit.discomfort(&cond);
        cond.wind_max = 40.0;
        let storm = kit.discomfort(&cond);
        assert_eq!(calm, storm);

        kit.windproof = false;
        assert_eq!(kit.discomfort(&cond), calm + 20.0);
    }

    #[test]
    fn removable_low_complexity_kit_can_score_negative() {
        let mut kit = item(8.0, 22.0);
        kit.removable = true;
        kit.complexity = -0.5;

        assert_eq!(kit.discomfort(&conditions()), -7.0);
    }
}

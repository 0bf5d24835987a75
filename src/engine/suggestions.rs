// ABOUTME: Smart suggestion buckets over the filtered food catalog
// ABOUTME: Five non-exclusive nutritional categories with a per-bucket display cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use ahara_core::constants::suggestions::{
    DISPLAY_CAP, HIGH_FIBER_MIN_G, HIGH_PROTEIN_MIN_G, LOW_CALORIE_MAX_KCAL,
};
use ahara_core::models::{FoodItem, PatientProfile, Virya};
use serde::Serialize;
use tracing::debug;

use super::filter::suggestion_candidates;

/// The named suggestion buckets, evaluated independently over the filtered set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SuggestionCategory {
    /// Protein above 10 g per 100 g
    HighProtein,
    /// Calories below 100 kcal per 100 g
    LowCalorie,
    /// Fiber above 5 g per 100 g
    HighFiber,
    /// Cold virya
    CoolingFoods,
    /// Hot virya
    HeatingFoods,
}

impl SuggestionCategory {
    /// All buckets, in display order
    pub const ALL: [Self; 5] = [
        Self::HighProtein,
        Self::LowCalorie,
        Self::HighFiber,
        Self::CoolingFoods,
        Self::HeatingFoods,
    ];

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighProtein => "High Protein",
            Self::LowCalorie => "Low Calorie",
            Self::HighFiber => "High Fiber",
            Self::CoolingFoods => "Cooling Foods",
            Self::HeatingFoods => "Heating Foods",
        }
    }

    /// Bucket membership test; buckets are non-exclusive
    pub fn admits(self, food: &FoodItem) -> bool {
        match self {
            Self::HighProtein => food.macros.protein > HIGH_PROTEIN_MIN_G,
            Self::LowCalorie => food.macros.calories < LOW_CALORIE_MAX_KCAL,
            Self::HighFiber => food.macros.fiber > HIGH_FIBER_MIN_G,
            Self::CoolingFoods => food.virya == Virya::Cold,
            Self::HeatingFoods => food.virya == Virya::Hot,
        }
    }
}

/// Bucketed suggestions for one patient
///
/// Buckets hold the full filtered membership in catalog order; the display
/// cap is applied only when rendering via [`SuggestionSet::display_bucket`].
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionSet {
    buckets: Vec<(SuggestionCategory, Vec<FoodItem>)>,
}

impl SuggestionSet {
    /// Full membership of one bucket, in catalog order
    pub fn bucket(&self, category: SuggestionCategory) -> &[FoodItem] {
        self.buckets
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(&[], |(_, items)| items.as_slice())
    }

    /// Bucket membership truncated to the display cap
    pub fn display_bucket(&self, category: SuggestionCategory) -> &[FoodItem] {
        let items = self.bucket(category);
        &items[..items.len().min(DISPLAY_CAP)]
    }

    /// Non-empty buckets in display order
    pub fn non_empty(&self) -> impl Iterator<Item = (SuggestionCategory, &[FoodItem])> {
        self.buckets
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(c, items)| (*c, items.as_slice()))
    }

    /// Every item eligible for at least one bucket
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|(_, items)| items.is_empty())
    }
}

/// Build the suggestion buckets for a patient over the current catalog
///
/// Applies the safety and suitability filters, then partitions survivors into
/// the five non-exclusive buckets.
pub fn build_suggestions(patient: &PatientProfile, catalog: &[FoodItem]) -> SuggestionSet {
    let candidates = suggestion_candidates(patient, catalog);
    let buckets = SuggestionCategory::ALL
        .into_iter()
        .map(|category| {
            let items: Vec<FoodItem> = candidates
                .iter()
                .filter(|food| category.admits(food))
                .map(|food| (*food).clone())
                .collect();
            (category, items)
        })
        .collect();
    debug!(patient = %patient.id, "built suggestion buckets");
    SuggestionSet { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahara_core::models::{
        DietPreference, DoshaType, FoodCategory, Gender, Guna, LifestyleProfile, MacroProfile,
        Rasa, Vipaka,
    };

    fn food(id: u64, name: &str, protein: f64, calories: f64, fiber: f64, virya: Virya) -> FoodItem {
        FoodItem::new(
            id,
            name,
            FoodCategory::Pulses,
            MacroProfile::new(calories, protein, 10.0, 1.0, fiber).unwrap(),
            Rasa::Sweet.into(),
            Guna::Light.into(),
            virya,
            Vipaka::Sweet,
            "Balances all Doshas",
        )
        .unwrap()
    }

    fn patient() -> PatientProfile {
        PatientProfile::new(
            "Asha Rao",
            None,
            34,
            Gender::Female,
            DoshaType::Vata,
            DietPreference::Vegetarian,
            "",
            LifestyleProfile::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_buckets_are_non_exclusive() {
        // Moong dal profile: high protein, high fiber, cooling
        let catalog = vec![food(1, "Moong Dal", 24.0, 347.0, 16.0, Virya::Cold)];
        let set = build_suggestions(&patient(), &catalog);
        assert_eq!(set.bucket(SuggestionCategory::HighProtein).len(), 1);
        assert_eq!(set.bucket(SuggestionCategory::HighFiber).len(), 1);
        assert_eq!(set.bucket(SuggestionCategory::CoolingFoods).len(), 1);
        assert!(set.bucket(SuggestionCategory::LowCalorie).is_empty());
        assert!(set.bucket(SuggestionCategory::HeatingFoods).is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        // Exactly at the cutoffs admits nothing
        let catalog = vec![food(1, "Edge Case", 10.0, 100.0, 5.0, Virya::Cold)];
        let set = build_suggestions(&patient(), &catalog);
        assert!(set.bucket(SuggestionCategory::HighProtein).is_empty());
        assert!(set.bucket(SuggestionCategory::LowCalorie).is_empty());
        assert!(set.bucket(SuggestionCategory::HighFiber).is_empty());
    }

    #[test]
    fn test_display_cap_truncates_to_three() {
        let catalog: Vec<FoodItem> = (1..=5)
            .map(|i| food(i, &format!("Food {i}"), 20.0, 50.0, 8.0, Virya::Cold))
            .collect();
        let set = build_suggestions(&patient(), &catalog);
        assert_eq!(set.bucket(SuggestionCategory::HighProtein).len(), 5);
        assert_eq!(set.display_bucket(SuggestionCategory::HighProtein).len(), 3);
        // Catalog order preserved
        assert_eq!(set.display_bucket(SuggestionCategory::HighProtein)[0].name, "Food 1");
    }
}

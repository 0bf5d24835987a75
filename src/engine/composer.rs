// ABOUTME: Diet chart composer accumulating meal entries for one patient
// ABOUTME: Add/remove entries, running totals, slot grouping, and finalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use ahara_core::errors::AppResult;
use ahara_core::models::{
    group_by_slot, DietChart, FoodItem, MealEntry, MealSlot, NutrientTotals, PatientProfile,
    PatientRef, PractitionerRef,
};
use tracing::debug;
use uuid::Uuid;

/// Accumulates a diet chart for one patient, one entry at a time
///
/// All operations are synchronous in-memory transformations; persistence
/// happens only when the finalized chart is handed to a store.
#[derive(Debug, Clone)]
pub struct ChartComposer {
    patient: PatientRef,
    practitioner: PractitionerRef,
    entries: Vec<MealEntry>,
}

impl ChartComposer {
    /// Start composing a chart for a patient
    pub fn new(patient: &PatientProfile, practitioner: PractitionerRef) -> Self {
        Self {
            patient: PatientRef {
                id: patient.id,
                name: patient.name.clone(),
                email: patient.email.clone(),
            },
            practitioner,
            entries: Vec::new(),
        }
    }

    /// Add a food selection; the nutrient snapshot is frozen here
    pub fn add_entry(
        &mut self,
        slot: MealSlot,
        food: FoodItem,
        quantity_g: f64,
    ) -> AppResult<&MealEntry> {
        let entry = MealEntry::new(slot, food, quantity_g)?;
        debug!(
            patient = %self.patient.id,
            slot = %slot,
            food = %entry.food.name,
            quantity_g,
            calories = entry.nutrients.calories,
            "added meal entry"
        );
        let idx = self.entries.len();
        self.entries.push(entry);
        Ok(&self.entries[idx])
    }

    /// Remove an entry by id; returns whether anything was removed
    pub fn remove_entry(&mut self, entry_id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != entry_id);
        self.entries.len() != before
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    /// No entries composed yet?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact elementwise sum of the frozen entry snapshots
    pub fn running_totals(&self) -> NutrientTotals {
        NutrientTotals::sum(self.entries.iter().map(|e| &e.nutrients))
    }

    /// Entries partitioned by slot, insertion order preserved
    pub fn grouped(&self) -> Vec<(MealSlot, Vec<&MealEntry>)> {
        group_by_slot(&self.entries)
    }

    /// Finalize into a chart, draining the composer
    ///
    /// An empty composition yields `None` and leaves nothing to persist; the
    /// caller treats that as a no-op, not an error.
    pub fn finalize(&mut self) -> Option<DietChart> {
        let meals = std::mem::take(&mut self.entries);
        DietChart::from_entries(self.patient.clone(), self.practitioner.clone(), meals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahara_core::models::{
        DietPreference, DoshaType, FoodCategory, Gender, Guna, LifestyleProfile, MacroProfile,
        Rasa, Vipaka, Virya,
    };

    fn rice() -> FoodItem {
        FoodItem::new(
            1,
            "Rice (White)",
            FoodCategory::Grains,
            MacroProfile::new(130.0, 2.7, 28.0, 0.3, 0.4).unwrap(),
            Rasa::Sweet.into(),
            Guna::Heavy.into(),
            Virya::Cold,
            Vipaka::Sweet,
            "Balances Vata & Pitta",
        )
        .unwrap()
    }

    fn ghee() -> FoodItem {
        FoodItem::new(
            3,
            "Ghee",
            FoodCategory::Fats,
            MacroProfile::new(900.0, 0.0, 0.0, 100.0, 0.0).unwrap(),
            Rasa::Sweet.into(),
            Guna::Heavy.into(),
            Virya::Hot,
            Vipaka::Sweet,
            "Balances Vata & Pitta",
        )
        .unwrap()
    }

    fn composer() -> ChartComposer {
        let patient = PatientProfile::new(
            "Asha Rao",
            None,
            34,
            Gender::Female,
            DoshaType::VataPitta,
            DietPreference::Vegetarian,
            "",
            LifestyleProfile::default(),
        )
        .unwrap();
        let practitioner = PractitionerRef {
            id: Uuid::new_v4(),
            name: "Meera Iyer".into(),
        };
        ChartComposer::new(&patient, practitioner)
    }

    #[test]
    fn test_running_totals_sum_snapshots() {
        let mut composer = composer();
        composer.add_entry(MealSlot::Lunch, rice(), 150.0).unwrap();
        composer.add_entry(MealSlot::Lunch, ghee(), 10.0).unwrap();
        let totals = composer.running_totals();
        assert_eq!(totals.calories, 285.0); // 195.0 + 90.0
        assert_eq!(totals.fat, 10.4); // 0.4 + 10.0
    }

    #[test]
    fn test_remove_entry() {
        let mut composer = composer();
        let id = composer
            .add_entry(MealSlot::Breakfast, rice(), 100.0)
            .unwrap()
            .id;
        assert!(composer.remove_entry(id));
        assert!(!composer.remove_entry(id));
        assert!(composer.is_empty());
    }

    #[test]
    fn test_finalize_empty_is_none() {
        let mut composer = composer();
        assert!(composer.finalize().is_none());
    }

    #[test]
    fn test_finalize_totals_match_entries() {
        let mut composer = composer();
        composer.add_entry(MealSlot::Lunch, rice(), 150.0).unwrap();
        composer.add_entry(MealSlot::Dinner, ghee(), 10.0).unwrap();
        let chart = composer.finalize().unwrap();
        let expected = NutrientTotals::sum(chart.meals.iter().map(|m| &m.nutrients));
        assert_eq!(chart.total_nutrients, expected);
        assert_eq!(chart.total_nutrients.calories, 285.0);
        // Composer drained after finalize
        assert!(composer.is_empty());
    }
}

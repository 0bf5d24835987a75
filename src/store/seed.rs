// ABOUTME: Starter food catalog seeded into an empty store on first use
// ABOUTME: Ten common Indian foods with full nutritional and ayurvedic profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use ahara_core::errors::AppResult;
use ahara_core::models::FoodItem;
use tracing::info;

use super::RecordStore;

/// (id, name, category, calories, protein, carbs, fat, fiber, rasa, guna, virya, vipaka, dosha effect)
type SeedRow = (
    u64,
    &'static str,
    &'static str,
    f64,
    f64,
    f64,
    f64,
    f64,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const SEED_FOODS: [SeedRow; 10] = [
    // Values are per 100 g reference portion
    (1, "Rice (White)", "Grains", 130.0, 2.7, 28.0, 0.3, 0.4, "Sweet", "Heavy", "Cold", "Sweet", "Balances Vata & Pitta"),
    (2, "Moong Dal", "Pulses", 347.0, 24.0, 59.0, 1.2, 16.0, "Sweet", "Light", "Cold", "Sweet", "Balances all Doshas"),
    (3, "Ghee", "Fats", 900.0, 0.0, 0.0, 100.0, 0.0, "Sweet", "Heavy", "Hot", "Sweet", "Balances Vata & Pitta"),
    (4, "Spinach", "Vegetables", 23.0, 2.9, 3.6, 0.4, 2.2, "Astringent", "Light", "Cold", "Pungent", "Balances Pitta & Kapha"),
    (5, "Ginger", "Spices", 80.0, 1.8, 18.0, 0.8, 2.0, "Pungent", "Light", "Hot", "Sweet", "Balances Vata & Kapha"),
    (6, "Banana", "Fruits", 89.0, 1.1, 23.0, 0.3, 2.6, "Sweet", "Heavy", "Cold", "Sweet", "Balances Vata & Pitta"),
    (7, "Turmeric", "Spices", 312.0, 9.7, 67.0, 3.2, 22.7, "Bitter/Pungent", "Light", "Hot", "Pungent", "Balances all Doshas"),
    (8, "Milk (Cow)", "Dairy", 61.0, 3.2, 4.8, 3.3, 0.0, "Sweet", "Heavy", "Cold", "Sweet", "Balances Vata & Pitta"),
    (9, "Chapati (Wheat)", "Grains", 120.0, 3.5, 25.0, 1.5, 2.5, "Sweet", "Heavy", "Hot", "Sweet", "Balances Vata"),
    (10, "Cucumber", "Vegetables", 15.0, 0.7, 3.6, 0.1, 0.5, "Sweet", "Light", "Cold", "Sweet", "Balances Pitta & Kapha"),
];

/// Build the starter catalog
pub fn sample_catalog() -> AppResult<Vec<FoodItem>> {
    SEED_FOODS
        .iter()
        .map(
            |&(id, name, category, calories, protein, carbs, fat, fiber, rasa, guna, virya, vipaka, dosha)| {
                FoodItem::new(
                    id,
                    name,
                    category.parse()?,
                    ahara_core::models::MacroProfile::new(calories, protein, carbs, fat, fiber)?,
                    rasa.parse()?,
                    guna.parse()?,
                    virya.parse()?,
                    vipaka.parse()?,
                    dosha,
                )
            },
        )
        .collect()
}

/// Seed the starter catalog into a store whose food collection is empty
///
/// Returns the catalog as now stored, seeded or pre-existing.
pub async fn ensure_catalog(store: &dyn RecordStore) -> AppResult<Vec<FoodItem>> {
    let existing = store.read_foods().await?;
    if !existing.is_empty() {
        return Ok(existing);
    }
    let catalog = sample_catalog()?;
    store.replace_foods(catalog.clone()).await?;
    info!(count = catalog.len(), "seeded starter food catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_sample_catalog_parses_cleanly() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog[0].name, "Rice (White)");
        assert_eq!(catalog[6].rasa.to_string(), "Bitter/Pungent");
    }

    #[tokio::test]
    async fn test_ensure_catalog_seeds_once() {
        let store = MemoryStore::new();
        let first = ensure_catalog(&store).await.unwrap();
        assert_eq!(first.len(), 10);

        // A populated store is left untouched
        let trimmed = vec![first[0].clone()];
        store.replace_foods(trimmed).await.unwrap();
        let second = ensure_catalog(&store).await.unwrap();
        assert_eq!(second.len(), 1);
    }
}

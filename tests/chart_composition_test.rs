// ABOUTME: Integration tests for diet chart composition and nutrient scaling
// ABOUTME: Covers per-entry scaling, frozen snapshots, totals, grouping, empty save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health
//! Chart composition tests
//!
//! Exercises the full composition path: quantity scaling against the 100 g
//! reference portion, one-decimal rounding, snapshot freezing at add time,
//! running totals, slot grouping, and the empty-chart no-op save.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use ahara::engine::ChartComposer;
use ahara::services::PractitionerService;
use ahara::store::{seed, MemoryStore, RecordStore};
use ahara_core::models::{
    DietPreference, DoshaType, FoodItem, Gender, LifestyleProfile, MealSlot, PatientProfile,
    PractitionerRef,
};
use uuid::Uuid;

fn practitioner() -> PractitionerRef {
    PractitionerRef {
        id: Uuid::new_v4(),
        name: "Meera Iyer".into(),
    }
}

fn patient() -> PatientProfile {
    PatientProfile::new(
        "Asha Rao",
        Some("asha@example.com".into()),
        34,
        Gender::Female,
        DoshaType::VataPitta,
        DietPreference::Vegetarian,
        "",
        LifestyleProfile::default(),
    )
    .unwrap()
}

fn catalog() -> Vec<FoodItem> {
    seed::sample_catalog().unwrap()
}

fn food(name: &str) -> FoodItem {
    catalog().into_iter().find(|f| f.name == name).unwrap()
}

#[test]
fn test_nutrients_scale_from_reference_portion() {
    let mut composer = ChartComposer::new(&patient(), practitioner());
    // Rice: 130 kcal, 2.7 g protein per 100 g
    let entry = composer
        .add_entry(MealSlot::Lunch, food("Rice (White)"), 150.0)
        .unwrap();
    assert_eq!(entry.nutrients.calories, 195.0);
    assert_eq!(entry.nutrients.protein, 4.1); // 4.05 rounds to 4.1
    assert_eq!(entry.nutrients.carbs, 42.0);
}

#[test]
fn test_totals_sum_rounded_snapshots() {
    let mut composer = ChartComposer::new(&patient(), practitioner());
    composer
        .add_entry(MealSlot::Lunch, food("Rice (White)"), 150.0)
        .unwrap();
    composer.add_entry(MealSlot::Lunch, food("Ghee"), 10.0).unwrap();
    // 195.0 + 90.0, summed over already-rounded per-entry values
    assert_eq!(composer.running_totals().calories, 285.0);
}

#[test]
fn test_snapshot_frozen_against_catalog_edits() {
    let mut composer = ChartComposer::new(&patient(), practitioner());
    let mut rice = food("Rice (White)");
    composer
        .add_entry(MealSlot::Breakfast, rice.clone(), 100.0)
        .unwrap();

    // Mutating the catalog copy after the fact changes nothing in the chart
    rice.macros.calories = 999.0;
    let chart = composer.finalize().unwrap();
    assert_eq!(chart.meals[0].nutrients.calories, 130.0);
}

#[test]
fn test_invalid_quantity_rejected() {
    let mut composer = ChartComposer::new(&patient(), practitioner());
    assert!(composer
        .add_entry(MealSlot::Lunch, food("Ghee"), 0.0)
        .is_err());
    assert!(composer
        .add_entry(MealSlot::Lunch, food("Ghee"), -50.0)
        .is_err());
    assert!(composer
        .add_entry(MealSlot::Lunch, food("Ghee"), f64::NAN)
        .is_err());
    assert!(composer.is_empty());
}

#[test]
fn test_grouping_preserves_slot_appearance_order() {
    let mut composer = ChartComposer::new(&patient(), practitioner());
    composer
        .add_entry(MealSlot::Dinner, food("Rice (White)"), 100.0)
        .unwrap();
    composer
        .add_entry(MealSlot::Breakfast, food("Banana"), 120.0)
        .unwrap();
    composer
        .add_entry(MealSlot::Dinner, food("Ghee"), 10.0)
        .unwrap();

    let grouped = composer.grouped();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0, MealSlot::Dinner);
    assert_eq!(grouped[0].1.len(), 2);
    assert_eq!(grouped[1].0, MealSlot::Breakfast);
}

#[tokio::test]
async fn test_empty_chart_save_leaves_store_untouched() {
    let store = Arc::new(MemoryStore::new());
    let service = PractitionerService::new(practitioner(), store.clone());
    let patient = patient();

    let mut composer = service.compose_chart(&patient);
    let saved = service.save_chart(&mut composer).await.unwrap();
    assert!(saved.is_none());
    assert!(store.read_charts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_saved_chart_round_trips_through_store() {
    let store = Arc::new(MemoryStore::new());
    let service = PractitionerService::new(practitioner(), store.clone());
    let patient = patient();

    let mut composer = service.compose_chart(&patient);
    composer
        .add_entry(MealSlot::Lunch, food("Moong Dal"), 200.0)
        .unwrap();
    let saved = service.save_chart(&mut composer).await.unwrap().unwrap();

    let stored = store.read_charts().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, saved.id);
    assert_eq!(stored[0].total_nutrients.calories, 694.0);
    assert_eq!(stored[0].patient.email.as_deref(), Some("asha@example.com"));
}

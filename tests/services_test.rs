// ABOUTME: End-to-end service tests: registration, lookup-backed catalog, portal
// ABOUTME: Uses a stubbed nutrition lookup so no network access is needed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health
//! Service workflow tests
//!
//! Drives the practitioner and patient services together over a shared
//! in-memory store: register a patient, extend the catalog through a stubbed
//! nutrition lookup, compose and save a chart, then read it back through the
//! patient portal alongside progress and payment records.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use ahara::lookup::{FoodData, NutritionLookup};
use ahara::services::{PatientPortalService, PractitionerService};
use ahara::store::MemoryStore;
use ahara_core::errors::{AppError, AppResult};
use ahara_core::models::{
    DietPreference, DoshaType, Gender, LifestyleProfile, MealSlot, PatientProfile, PaymentStatus,
    PractitionerRef,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

enum StubLookup {
    Returning(FoodData),
    RateLimited,
}

#[async_trait]
impl NutritionLookup for StubLookup {
    async fn lookup(&self, _food_name: &str) -> AppResult<FoodData> {
        match self {
            Self::Returning(data) => Ok(data.clone()),
            Self::RateLimited => Err(AppError::rate_limited("try again in a moment")),
        }
    }
}

fn quinoa() -> FoodData {
    FoodData {
        name: "Quinoa".into(),
        category: "Grains".into(),
        calories: 120.0,
        protein: 4.4,
        carbs: 21.3,
        fat: 1.9,
        fiber: 2.8,
        rasa: "Sweet/Astringent".into(),
        guna: "Light".into(),
        virya: "Hot".into(),
        vipaka: "Sweet".into(),
        dosha: "Balances Vata & Kapha".into(),
    }
}

fn service(store: Arc<MemoryStore>) -> PractitionerService {
    PractitionerService::new(
        PractitionerRef {
            id: Uuid::new_v4(),
            name: "Meera Iyer".into(),
        },
        store,
    )
}

async fn registered_patient(svc: &PractitionerService) -> PatientProfile {
    svc.register_patient(
        "Asha Rao",
        Some("asha@example.com".into()),
        34,
        Gender::Female,
        DoshaType::VataPitta,
        DietPreference::Vegetarian,
        "allergic to peanuts",
        LifestyleProfile::default(),
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn test_registration_persists_patient() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(store);
    let patient = registered_patient(&svc).await;

    let found = svc.patient(patient.id).await.unwrap();
    assert_eq!(found.name, "Asha Rao");
    assert_eq!(found.dosha, DoshaType::VataPitta);

    let missing = svc.patient(Uuid::new_v4()).await;
    assert!(missing.is_err());
}

#[tokio::test]
async fn test_lookup_extends_catalog_with_next_id() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(store);

    let added = svc
        .add_food_from_lookup(&StubLookup::Returning(quinoa()), "quinoa")
        .await
        .unwrap();
    assert_eq!(added.id, 11); // seeds occupy 1..=10
    assert_eq!(added.name, "Quinoa");

    let catalog = svc.catalog().await.unwrap();
    assert_eq!(catalog.len(), 11);
}

#[tokio::test]
async fn test_lookup_failure_leaves_catalog_unchanged() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(store);
    let before = svc.catalog().await.unwrap().len();

    let result = svc
        .add_food_from_lookup(&StubLookup::RateLimited, "quinoa")
        .await;
    assert!(result.is_err());
    assert_eq!(svc.catalog().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_malformed_lookup_payload_rejected_at_catalog_boundary() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(store);

    let mut bad = quinoa();
    bad.virya = "Lukewarm".into();
    let result = svc
        .add_food_from_lookup(&StubLookup::Returning(bad), "quinoa")
        .await;
    assert!(result.is_err());
    assert_eq!(svc.catalog().await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_chart_flows_from_practitioner_to_portal() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(store.clone());
    let portal = PatientPortalService::new(store);
    let patient = registered_patient(&svc).await;
    let catalog = svc.catalog().await.unwrap();

    let mut composer = svc.compose_chart(&patient);
    composer
        .add_entry(MealSlot::Breakfast, catalog[5].clone(), 120.0)
        .unwrap();
    composer
        .add_entry(MealSlot::Lunch, catalog[0].clone(), 150.0)
        .unwrap();
    let saved = svc.save_chart(&mut composer).await.unwrap().unwrap();

    let mine = portal.charts_for(&patient).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, saved.id);
    assert_eq!(mine[0].meals.len(), 2);
}

#[tokio::test]
async fn test_suggestions_exclude_allergy_matches() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(store);
    let patient = registered_patient(&svc).await;

    // "allergic to peanuts" contains no catalog names, so suggestions exist
    let suggestions = svc.suggestions(&patient).await.unwrap();
    assert!(!suggestions.is_empty());

    // Search keyed on a term also honors the safety rule
    let hits = svc.search_foods(Some(&patient), "dal").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Moong Dal");
}

#[tokio::test]
async fn test_dashboard_counts_track_collections() {
    let store = Arc::new(MemoryStore::new());
    let svc = service(store);
    let patient = registered_patient(&svc).await;
    let catalog = svc.catalog().await.unwrap();

    let mut composer = svc.compose_chart(&patient);
    composer
        .add_entry(MealSlot::Dinner, catalog[1].clone(), 100.0)
        .unwrap();
    svc.save_chart(&mut composer).await.unwrap();

    let summary = svc.dashboard_summary().await.unwrap();
    assert_eq!(summary.patients, 1);
    assert_eq!(summary.foods, 10);
    assert_eq!(summary.charts, 1);
}

#[tokio::test]
async fn test_progress_and_payments_through_portal() {
    let store = Arc::new(MemoryStore::new());
    let portal = PatientPortalService::new(store);
    let patient_id = Uuid::new_v4();
    let practitioner_id = Uuid::new_v4();

    portal
        .log_progress(
            patient_id,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Some(61.5),
            3,
            8,
            "felt light after lunch",
        )
        .await
        .unwrap();
    portal
        .record_payment(
            patient_id,
            practitioner_id,
            1500.0,
            "Initial consultation",
            PaymentStatus::Completed,
        )
        .await
        .unwrap();

    assert_eq!(portal.progress_for(patient_id).await.unwrap().len(), 1);
    let payments = portal.payments_for(patient_id).await.unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].status, PaymentStatus::Completed);

    // Energy level outside 1..=10 is rejected
    let bad = portal
        .log_progress(
            patient_id,
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            None,
            2,
            11,
            "",
        )
        .await;
    assert!(bad.is_err());
}

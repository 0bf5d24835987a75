// ABOUTME: Practitioner workflows: patient registration, catalog, chart save
// ABOUTME: Composition helpers and dashboard summary over the record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use std::sync::Arc;

use ahara_core::errors::{AppError, AppResult};
use ahara_core::models::{
    DietChart, DietPreference, DoshaType, FoodItem, Gender, LifestyleProfile, PatientProfile,
    PractitionerRef,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::engine::{build_suggestions, search_candidates, ChartComposer, SuggestionSet};
use crate::lookup::NutritionLookup;
use crate::store::{seed, RecordStore};

/// How many saved charts the dashboard shows
const RECENT_CHART_LIMIT: usize = 5;

/// Counts shown on the practitioner dashboard
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardSummary {
    /// Registered patients
    pub patients: usize,
    /// Catalog items
    pub foods: usize,
    /// Saved diet charts
    pub charts: usize,
}

/// Practitioner-facing service: registration, catalog, and chart workflows
pub struct PractitionerService {
    practitioner: PractitionerRef,
    store: Arc<dyn RecordStore>,
}

impl PractitionerService {
    /// Create a service for one practitioner over a store
    pub fn new(practitioner: PractitionerRef, store: Arc<dyn RecordStore>) -> Self {
        Self {
            practitioner,
            store,
        }
    }

    /// Food catalog, seeding the starter set when the store is empty
    pub async fn catalog(&self) -> AppResult<Vec<FoodItem>> {
        seed::ensure_catalog(self.store.as_ref()).await
    }

    /// Register a new patient and persist the updated roster
    #[allow(clippy::too_many_arguments)]
    #[instrument(skip(self, medical_history, lifestyle))]
    pub async fn register_patient(
        &self,
        name: &str,
        email: Option<String>,
        age: u16,
        gender: Gender,
        dosha: DoshaType,
        diet_preference: DietPreference,
        medical_history: &str,
        lifestyle: LifestyleProfile,
    ) -> AppResult<PatientProfile> {
        let patient = PatientProfile::new(
            name,
            email,
            age,
            gender,
            dosha,
            diet_preference,
            medical_history,
            lifestyle,
        )?;
        let mut patients = self.store.read_patients().await?;
        patients.push(patient.clone());
        self.store.replace_patients(patients).await?;
        info!(patient = %patient.id, "registered patient");
        Ok(patient)
    }

    /// All registered patients
    pub async fn patients(&self) -> AppResult<Vec<PatientProfile>> {
        self.store.read_patients().await
    }

    /// Look up a patient by id
    pub async fn patient(&self, id: Uuid) -> AppResult<PatientProfile> {
        self.store
            .read_patients()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found(format!("patient {id} not found")))
    }

    /// Add a food to the catalog, assigning the next numeric id
    #[instrument(skip(self, food), fields(food = %food.name))]
    pub async fn add_food(&self, mut food: FoodItem) -> AppResult<FoodItem> {
        let mut foods = self.catalog().await?;
        food.id = next_food_id(&foods);
        foods.push(food.clone());
        self.store.replace_foods(foods).await?;
        info!(id = food.id, "added food to catalog");
        Ok(food)
    }

    /// Resolve a food by name through the remote lookup and add it
    #[instrument(skip(self, lookup))]
    pub async fn add_food_from_lookup(
        &self,
        lookup: &dyn NutritionLookup,
        food_name: &str,
    ) -> AppResult<FoodItem> {
        let data = lookup.lookup(food_name).await?;
        let mut foods = self.catalog().await?;
        let food = data.into_food_item(next_food_id(&foods))?;
        foods.push(food.clone());
        self.store.replace_foods(foods).await?;
        info!(id = food.id, food = %food.name, "added looked-up food to catalog");
        Ok(food)
    }

    /// Catalog filtered by search term and, when a patient is selected, the
    /// allergy safety rule
    pub async fn search_foods(
        &self,
        patient: Option<&PatientProfile>,
        term: &str,
    ) -> AppResult<Vec<FoodItem>> {
        let catalog = self.catalog().await?;
        Ok(search_candidates(patient, &catalog, term)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Suggestion buckets for a patient over the current catalog
    pub async fn suggestions(&self, patient: &PatientProfile) -> AppResult<SuggestionSet> {
        let catalog = self.catalog().await?;
        Ok(build_suggestions(patient, &catalog))
    }

    /// Start composing a chart for a patient
    #[must_use]
    pub fn compose_chart(&self, patient: &PatientProfile) -> ChartComposer {
        ChartComposer::new(patient, self.practitioner.clone())
    }

    /// Finalize and persist a composed chart
    ///
    /// An empty composition is a no-op: nothing is written and `Ok(None)` is
    /// returned so the caller can tell the save apart from a failure.
    #[instrument(skip(self, composer))]
    pub async fn save_chart(&self, composer: &mut ChartComposer) -> AppResult<Option<DietChart>> {
        let Some(chart) = composer.finalize() else {
            info!("empty chart composition, nothing saved");
            return Ok(None);
        };
        let mut charts = self.store.read_charts().await?;
        charts.push(chart.clone());
        self.store.replace_charts(charts).await?;
        info!(chart = %chart.id, patient = %chart.patient.id, "saved diet chart");
        Ok(Some(chart))
    }

    /// The most recently saved charts, newest first
    pub async fn recent_charts(&self) -> AppResult<Vec<DietChart>> {
        let mut charts = self.store.read_charts().await?;
        charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        charts.truncate(RECENT_CHART_LIMIT);
        Ok(charts)
    }

    /// Dashboard counts across the collections
    pub async fn dashboard_summary(&self) -> AppResult<DashboardSummary> {
        Ok(DashboardSummary {
            patients: self.store.read_patients().await?.len(),
            foods: self.catalog().await?.len(),
            charts: self.store.read_charts().await?.len(),
        })
    }
}

/// Next catalog id: one past the current maximum
fn next_food_id(foods: &[FoodItem]) -> u64 {
    foods.iter().map(|f| f.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> PractitionerService {
        let practitioner = PractitionerRef {
            id: Uuid::new_v4(),
            name: "Meera Iyer".into(),
        };
        PractitionerService::new(practitioner, Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_next_food_id_follows_maximum() {
        let svc = service();
        let catalog = svc.catalog().await.unwrap();
        assert_eq!(catalog.len(), 10);

        let template = catalog[0].clone();
        let added = svc.add_food(template).await.unwrap();
        assert_eq!(added.id, 11);
    }

    #[tokio::test]
    async fn test_save_empty_chart_is_noop() {
        let svc = service();
        let patient = svc
            .register_patient(
                "Asha Rao",
                None,
                34,
                Gender::Female,
                DoshaType::VataPitta,
                DietPreference::Vegetarian,
                "",
                LifestyleProfile::default(),
            )
            .await
            .unwrap();

        let mut composer = svc.compose_chart(&patient);
        let saved = svc.save_chart(&mut composer).await.unwrap();
        assert!(saved.is_none());
        assert!(svc.recent_charts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_charts_newest_first_capped_at_five() {
        let svc = service();
        let patient = svc
            .register_patient(
                "Asha Rao",
                None,
                34,
                Gender::Female,
                DoshaType::Vata,
                DietPreference::Vegetarian,
                "",
                LifestyleProfile::default(),
            )
            .await
            .unwrap();
        let catalog = svc.catalog().await.unwrap();

        for _ in 0..7 {
            let mut composer = svc.compose_chart(&patient);
            composer
                .add_entry(
                    ahara_core::models::MealSlot::Lunch,
                    catalog[0].clone(),
                    100.0,
                )
                .unwrap();
            svc.save_chart(&mut composer).await.unwrap();
        }

        let recent = svc.recent_charts().await.unwrap();
        assert_eq!(recent.len(), 5);
        for pair in recent.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}

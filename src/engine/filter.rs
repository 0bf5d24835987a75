// ABOUTME: Allergy and dosha candidate filtering over the food catalog
// ABOUTME: Safety (allergy keyword) and suitability (dosha compatibility) rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # Candidate Filtering
//!
//! Two independent rules decide which catalog items a patient may be offered:
//!
//! - **Safety**: an item is excluded when the patient's lowercased medical
//!   history contains the item's lowercased name or category as a substring.
//!   This is deliberate keyword containment, not tokenized matching, carried
//!   over from the clinical workflow it replaces; a name like "pea" will match
//!   inside "peanuts". An empty history excludes nothing.
//! - **Suitability** (suggestions only): an item passes when any component of
//!   the patient's dosha type appears in the item's dosha-effect text, or the
//!   text claims to balance all doshas.
//!
//! The plain searchable list applies only the safety rule; the suggestion
//! pathway applies both.

use ahara_core::constants::dosha::ALL_DOSHAS_MARKER;
use ahara_core::models::{FoodItem, PatientProfile};
use tracing::debug;

/// Does the safety rule exclude this item for this patient?
pub fn is_allergy_excluded(patient: &PatientProfile, food: &FoodItem) -> bool {
    let history = patient.medical_history.to_lowercase();
    if history.is_empty() {
        return false;
    }
    history.contains(&food.name.to_lowercase())
        || history.contains(&food.category.as_str().to_lowercase())
}

/// Does the suitability rule admit this item for this patient's constitution?
pub fn is_dosha_suitable(patient: &PatientProfile, food: &FoodItem) -> bool {
    if food.dosha_effect.contains(ALL_DOSHAS_MARKER) {
        return true;
    }
    patient
        .dosha
        .components()
        .iter()
        .any(|dosha| food.dosha_effect.contains(dosha.as_str()))
}

/// Catalog subset passing the safety rule, in catalog order
pub fn safe_candidates<'a>(
    patient: &PatientProfile,
    catalog: &'a [FoodItem],
) -> Vec<&'a FoodItem> {
    catalog
        .iter()
        .filter(|food| !is_allergy_excluded(patient, food))
        .collect()
}

/// Catalog subset eligible for smart suggestions: safety plus suitability
pub fn suggestion_candidates<'a>(
    patient: &PatientProfile,
    catalog: &'a [FoodItem],
) -> Vec<&'a FoodItem> {
    let candidates: Vec<&FoodItem> = catalog
        .iter()
        .filter(|food| !is_allergy_excluded(patient, food) && is_dosha_suitable(patient, food))
        .collect();
    debug!(
        patient = %patient.id,
        dosha = %patient.dosha,
        eligible = candidates.len(),
        total = catalog.len(),
        "computed suggestion candidates"
    );
    candidates
}

/// Searchable list: case-insensitive name/category match plus the safety rule
///
/// With no patient selected only the search term applies, matching the
/// composition screen before a patient is chosen.
pub fn search_candidates<'a>(
    patient: Option<&PatientProfile>,
    catalog: &'a [FoodItem],
    term: &str,
) -> Vec<&'a FoodItem> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|food| {
            let matches_term = food.name.to_lowercase().contains(&needle)
                || food.category.as_str().to_lowercase().contains(&needle);
            let safe = patient.is_none_or(|p| !is_allergy_excluded(p, food));
            matches_term && safe
        })
        .collect()
}

// ABOUTME: Diet chart models with frozen per-entry nutrient snapshots
// ABOUTME: MealSlot, NutrientTotals, MealEntry, and DietChart definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::nutrition::REFERENCE_PORTION_G;
use crate::errors::AppError;
use crate::models::food::{FoodItem, MacroProfile};

/// Daily meal slots, in chronological order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Mid-morning snack
    #[serde(rename = "Mid-Morning")]
    MidMorning,
    /// Midday meal
    Lunch,
    /// Evening snack
    Evening,
    /// Night meal
    Dinner,
}

impl MealSlot {
    /// Canonical display label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MidMorning => "Mid-Morning",
            Self::Lunch => "Lunch",
            Self::Evening => "Evening",
            Self::Dinner => "Dinner",
        }
    }
}

impl FromStr for MealSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Breakfast" => Ok(Self::Breakfast),
            "Mid-Morning" => Ok(Self::MidMorning),
            "Lunch" => Ok(Self::Lunch),
            "Evening" => Ok(Self::Evening),
            "Dinner" => Ok(Self::Dinner),
            other => Err(AppError::invalid_format(format!(
                "unrecognized meal slot: {other}"
            ))),
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to one decimal place, the precision nutrient snapshots are frozen at
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A set of nutrient values: a frozen per-entry snapshot or a chart total
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Dietary fiber in grams
    pub fiber: f64,
}

impl NutrientTotals {
    /// Scale per-100 g macro values to a quantity in grams, rounding each
    /// nutrient to one decimal place
    pub fn scaled(macros: &MacroProfile, quantity_g: f64) -> Self {
        let factor = quantity_g / REFERENCE_PORTION_G;
        Self {
            calories: round_to_tenth(macros.calories * factor),
            protein: round_to_tenth(macros.protein * factor),
            carbs: round_to_tenth(macros.carbs * factor),
            fat: round_to_tenth(macros.fat * factor),
            fiber: round_to_tenth(macros.fiber * factor),
        }
    }

    /// Elementwise sum over a sequence of snapshots
    pub fn sum<'a>(snapshots: impl IntoIterator<Item = &'a Self>) -> Self {
        snapshots.into_iter().fold(Self::default(), |acc, s| Self {
            calories: acc.calories + s.calories,
            protein: acc.protein + s.protein,
            carbs: acc.carbs + s.carbs,
            fat: acc.fat + s.fat,
            fiber: acc.fiber + s.fiber,
        })
    }
}

/// One food selection within a diet chart
///
/// The nutrient snapshot is computed once at construction and frozen: later
/// edits to the catalog entry never change it. The referenced food is embedded
/// wholesale for the same reason.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Entry identity
    pub id: Uuid,
    /// Which meal slot this entry belongs to
    pub slot: MealSlot,
    /// Snapshot of the selected food at entry-add time
    pub food: FoodItem,
    /// Quantity in grams
    pub quantity_g: f64,
    /// Frozen nutrient snapshot scaled to the quantity
    pub nutrients: NutrientTotals,
}

impl MealEntry {
    /// Add a food selection, freezing its scaled nutrient snapshot
    ///
    /// The quantity must be a finite positive number of grams.
    pub fn new(slot: MealSlot, food: FoodItem, quantity_g: f64) -> Result<Self, AppError> {
        if !quantity_g.is_finite() || quantity_g <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "quantity must be a positive number of grams, got {quantity_g}"
            )));
        }
        let nutrients = NutrientTotals::scaled(&food.macros, quantity_g);
        Ok(Self {
            id: Uuid::new_v4(),
            slot,
            food,
            quantity_g,
            nutrients,
        })
    }
}

/// Reference to the patient a chart is assigned to, with display snapshots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRef {
    /// Patient identity
    pub id: Uuid,
    /// Patient name at chart creation time
    pub name: String,
    /// Patient contact email at chart creation time, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Reference to the practitioner who authored a chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PractitionerRef {
    /// Practitioner identity
    pub id: Uuid,
    /// Practitioner name at chart creation time
    pub name: String,
}

/// A dated, practitioner-authored meal plan with aggregated nutrient totals
///
/// Invariant: `total_nutrients` equals the elementwise sum of the entry
/// snapshots at save time. It is computed at construction, never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietChart {
    /// Chart identity
    pub id: Uuid,
    /// Assigned patient
    pub patient: PatientRef,
    /// Authoring practitioner
    pub practitioner: PractitionerRef,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Ordered meal entries, in insertion order
    pub meals: Vec<MealEntry>,
    /// Elementwise sum of all entry snapshots
    pub total_nutrients: NutrientTotals,
}

impl DietChart {
    /// Assemble a chart from at least one meal entry
    ///
    /// Returns `None` for an empty composition: saving an empty chart is a
    /// no-op, not an error.
    pub fn from_entries(
        patient: PatientRef,
        practitioner: PractitionerRef,
        meals: Vec<MealEntry>,
    ) -> Option<Self> {
        if meals.is_empty() {
            return None;
        }
        let total_nutrients = NutrientTotals::sum(meals.iter().map(|m| &m.nutrients));
        Some(Self {
            id: Uuid::new_v4(),
            patient,
            practitioner,
            created_at: Utc::now(),
            meals,
            total_nutrients,
        })
    }

    /// Partition entries by meal slot, preserving insertion order within each
    /// slot and ordering slots by first appearance
    pub fn grouped_by_slot(&self) -> Vec<(MealSlot, Vec<&MealEntry>)> {
        group_by_slot(&self.meals)
    }
}

/// Partition entries by slot label, preserving insertion order
///
/// Slots appear in order of their first entry, matching how the plan was
/// composed rather than chronological slot order.
pub fn group_by_slot(meals: &[MealEntry]) -> Vec<(MealSlot, Vec<&MealEntry>)> {
    let mut groups: Vec<(MealSlot, Vec<&MealEntry>)> = Vec::new();
    for entry in meals {
        if let Some((_, bucket)) = groups.iter_mut().find(|(slot, _)| *slot == entry.slot) {
            bucket.push(entry);
        } else {
            groups.push((entry.slot, vec![entry]));
        }
    }
    groups
}

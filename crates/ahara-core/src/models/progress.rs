// ABOUTME: Patient-logged progress entries independent of diet charts
// ABOUTME: ProgressEntry with validated energy level and optional weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// A patient-logged progress record
///
/// Associated to a patient only; charts are not referenced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    /// Entry identity
    pub id: Uuid,
    /// Logging patient
    pub patient_id: Uuid,
    /// Day the entry applies to
    pub date: NaiveDate,
    /// Body weight in kg, if logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Number of planned meals completed that day
    pub meals_completed: u8,
    /// Self-reported energy level, 1 through 10
    pub energy_level: u8,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl ProgressEntry {
    /// Log a progress entry; energy level must be within 1..=10 and weight,
    /// if given, must be positive
    pub fn new(
        patient_id: Uuid,
        date: NaiveDate,
        weight_kg: Option<f64>,
        meals_completed: u8,
        energy_level: u8,
        notes: impl Into<String>,
    ) -> Result<Self, AppError> {
        if !(1..=10).contains(&energy_level) {
            return Err(AppError::out_of_range(format!(
                "energy level must be between 1 and 10, got {energy_level}"
            )));
        }
        if let Some(weight) = weight_kg {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(AppError::out_of_range(format!(
                    "weight must be a positive number of kg, got {weight}"
                )));
            }
        }
        Ok(Self {
            id: Uuid::new_v4(),
            patient_id,
            date,
            weight_kg,
            meals_completed,
            energy_level,
            notes: notes.into(),
        })
    }
}

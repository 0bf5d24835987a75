// ABOUTME: Patient profile models with Ayurvedic constitution and lifestyle fields
// ABOUTME: PatientProfile, Dosha, DoshaType, Gender, and DietPreference definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// A single Ayurvedic constitutional component
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Dosha {
    /// Air/ether constitution
    Vata,
    /// Fire/water constitution
    Pitta,
    /// Earth/water constitution
    Kapha,
}

impl Dosha {
    /// Canonical display name, also the token matched against dosha-effect text
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient constitution: a single dosha or a hyphenated two-dosha combination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum DoshaType {
    /// Vata constitution
    Vata,
    /// Pitta constitution
    Pitta,
    /// Kapha constitution
    Kapha,
    /// Vata-Pitta combination
    VataPitta,
    /// Pitta-Kapha combination
    PittaKapha,
    /// Vata-Kapha combination
    VataKapha,
}

impl DoshaType {
    /// Component doshas, in display order
    pub const fn components(self) -> &'static [Dosha] {
        match self {
            Self::Vata => &[Dosha::Vata],
            Self::Pitta => &[Dosha::Pitta],
            Self::Kapha => &[Dosha::Kapha],
            Self::VataPitta => &[Dosha::Vata, Dosha::Pitta],
            Self::PittaKapha => &[Dosha::Pitta, Dosha::Kapha],
            Self::VataKapha => &[Dosha::Vata, Dosha::Kapha],
        }
    }

    /// The dominant (first-listed) dosha component
    pub const fn primary(self) -> Dosha {
        match self {
            Self::Vata | Self::VataPitta | Self::VataKapha => Dosha::Vata,
            Self::Pitta | Self::PittaKapha => Dosha::Pitta,
            Self::Kapha => Dosha::Kapha,
        }
    }
}

impl FromStr for DoshaType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Vata" => Ok(Self::Vata),
            "Pitta" => Ok(Self::Pitta),
            "Kapha" => Ok(Self::Kapha),
            "Vata-Pitta" => Ok(Self::VataPitta),
            "Pitta-Kapha" => Ok(Self::PittaKapha),
            "Vata-Kapha" => Ok(Self::VataKapha),
            other => Err(AppError::invalid_format(format!(
                "unrecognized dosha type: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for DoshaType {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DoshaType> for String {
    fn from(dosha: DoshaType) -> Self {
        dosha.to_string()
    }
}

impl fmt::Display for DoshaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .components()
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join("-");
        f.write_str(&parts)
    }
}

/// Patient gender as captured at registration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other / not listed
    Other,
}

/// Dietary preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DietPreference {
    /// Vegetarian diet
    Vegetarian,
    /// Non-vegetarian diet
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    /// Vegan diet
    Vegan,
}

/// Lifestyle fields captured at registration, all free text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LifestyleProfile {
    /// Meal frequency, e.g. `3 times/day`
    #[serde(default)]
    pub meal_frequency: String,
    /// Bowel movement pattern
    #[serde(default)]
    pub bowel_pattern: String,
    /// Water intake, e.g. `2.5 L/day`
    #[serde(default)]
    pub water_intake: String,
}

/// A registered patient
///
/// Created by practitioner registration and read by the composition engine to
/// drive allergy and dosha filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientProfile {
    /// Patient identity
    pub id: Uuid,
    /// Full name
    pub name: String,
    /// Contact email, if provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Age in years
    pub age: u16,
    /// Gender
    pub gender: Gender,
    /// Constitutional type driving suggestion filtering
    pub dosha: DoshaType,
    /// Dietary preference
    pub diet_preference: DietPreference,
    /// Free-text medical history and allergy notes; drives the allergy filter
    #[serde(default)]
    pub medical_history: String,
    /// Lifestyle fields
    #[serde(default)]
    pub lifestyle: LifestyleProfile,
}

impl PatientProfile {
    /// Register a new patient with a fresh identity
    ///
    /// The name must be non-empty and age must be positive; other fields are
    /// taken as provided.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        email: Option<String>,
        age: u16,
        gender: Gender,
        dosha: DoshaType,
        diet_preference: DietPreference,
        medical_history: impl Into<String>,
        lifestyle: LifestyleProfile,
    ) -> Result<Self, AppError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if age == 0 {
            return Err(AppError::out_of_range("age must be positive"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            age,
            gender,
            dosha,
            diet_preference,
            medical_history: medical_history.into(),
            lifestyle,
        })
    }
}

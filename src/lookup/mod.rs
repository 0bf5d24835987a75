// ABOUTME: Remote nutrition lookup: wire payload parsing and the provider trait
// ABOUTME: Validates the twelve-field food payload and converts it to a catalog item
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # Nutrition Lookup
//!
//! Foods absent from the catalog can be resolved through a chat-completion
//! model that returns a single JSON object with twelve required fields. The
//! payload layer here is provider-agnostic: it strips markdown code fences,
//! checks field presence, and converts the loosely-typed wire form into a
//! validated [`FoodItem`]. [`openai::OpenAiNutritionProvider`] supplies the
//! HTTP half.

use ahara_core::constants::lookup::REQUIRED_FIELDS;
use ahara_core::errors::{AppError, AppResult};
use ahara_core::models::{FoodItem, MacroProfile};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod openai;

pub use openai::OpenAiNutritionProvider;

/// Loosely-typed food payload as returned over the wire
///
/// Ayurvedic fields stay free-form strings here; strict enum parsing happens
/// in [`FoodData::into_food_item`] so a malformed payload reports which value
/// was bad rather than failing opaquely during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodData {
    /// Food name as the model spelled it
    pub name: String,
    /// Catalog category label
    pub category: String,
    /// kcal per 100 g
    pub calories: f64,
    /// grams per 100 g
    pub protein: f64,
    /// grams per 100 g
    pub carbs: f64,
    /// grams per 100 g
    pub fat: f64,
    /// grams per 100 g
    pub fiber: f64,
    /// Taste profile, possibly slash-combined
    pub rasa: String,
    /// Quality profile, possibly slash-combined
    pub guna: String,
    /// Potency: Hot or Cold
    pub virya: String,
    /// Post-digestive effect
    pub vipaka: String,
    /// Free-text dosha balancing description
    pub dosha: String,
}

impl FoodData {
    /// Convert into a validated catalog item with the given id
    ///
    /// # Errors
    ///
    /// Returns an error if any ayurvedic field fails strict parsing or a
    /// nutritional value is negative or non-finite.
    pub fn into_food_item(self, id: u64) -> AppResult<FoodItem> {
        FoodItem::new(
            id,
            self.name,
            self.category.parse()?,
            MacroProfile::new(self.calories, self.protein, self.carbs, self.fat, self.fiber)?,
            self.rasa.parse()?,
            self.guna.parse()?,
            self.virya.parse()?,
            self.vipaka.parse()?,
            self.dosha,
        )
    }
}

/// Strip a leading/trailing markdown code fence from a model response
///
/// Handles both ```` ```json ```` and bare ```` ``` ```` fences; anything else
/// passes through untouched.
#[must_use]
pub fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Parse a raw model response into a [`FoodData`] payload
///
/// # Errors
///
/// Returns `InvalidFormat` if the cleaned content is not JSON, and
/// `MissingRequiredField` naming every absent field if the object is
/// incomplete.
pub fn parse_food_payload(content: &str) -> AppResult<FoodData> {
    let cleaned = strip_code_fences(content);
    let value: serde_json::Value = serde_json::from_str(cleaned)
        .map_err(|e| AppError::invalid_format(format!("lookup response is not valid JSON: {e}")))?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| value.get(field).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::missing_field(format!(
            "incomplete food data: missing {}",
            missing.join(", ")
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::invalid_format(format!("malformed food data: {e}")))
}

/// Provider seam for remote nutrition lookups
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Resolve full nutritional and ayurvedic data for a food by name
    async fn lookup(&self, food_name: &str) -> AppResult<FoodData>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahara_core::errors::ErrorCode;

    const PAYLOAD: &str = r#"{
        "name": "Quinoa",
        "category": "Grains",
        "calories": 120,
        "protein": 4.4,
        "carbs": 21.3,
        "fat": 1.9,
        "fiber": 2.8,
        "rasa": "Sweet/Astringent",
        "guna": "Light",
        "virya": "Hot",
        "vipaka": "Sweet",
        "dosha": "Balances Vata & Kapha"
    }"#;

    #[test]
    fn test_parse_plain_payload() {
        let data = parse_food_payload(PAYLOAD).unwrap();
        assert_eq!(data.name, "Quinoa");
        assert_eq!(data.calories, 120.0);
    }

    #[test]
    fn test_strips_json_fence() {
        let fenced = format!("```json\n{PAYLOAD}\n```");
        let data = parse_food_payload(&fenced).unwrap();
        assert_eq!(data.name, "Quinoa");
    }

    #[test]
    fn test_strips_bare_fence() {
        let fenced = format!("```\n{PAYLOAD}\n```");
        assert!(parse_food_payload(&fenced).is_ok());
    }

    #[test]
    fn test_missing_fields_are_named() {
        let err = parse_food_payload(r#"{"name": "Quinoa", "calories": 120}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert!(err.message.contains("category"));
        assert!(err.message.contains("vipaka"));
    }

    #[test]
    fn test_non_json_is_invalid_format() {
        let err = parse_food_payload("Sorry, I cannot help with that.").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_into_food_item_parses_enums_strictly() {
        let data = parse_food_payload(PAYLOAD).unwrap();
        let item = data.into_food_item(11).unwrap();
        assert_eq!(item.id, 11);
        assert_eq!(item.rasa.to_string(), "Sweet/Astringent");

        let mut bad = parse_food_payload(PAYLOAD).unwrap();
        bad.virya = "Lukewarm".into();
        assert!(bad.into_food_item(12).is_err());
    }
}

// ABOUTME: Food catalog models with nutritional and Ayurvedic attributes
// ABOUTME: FoodItem, MacroProfile, and closed enums for category, rasa, guna, virya, vipaka
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Closed set of food catalog categories
///
/// Unrecognized category text is rejected at the store boundary rather than
/// propagated as free text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FoodCategory {
    /// Rice, wheat, and other cereal grains
    Grains,
    /// Lentils and legumes
    Pulses,
    /// Vegetables
    Vegetables,
    /// Fruits
    Fruits,
    /// Milk and milk products
    Dairy,
    /// Oils, ghee, and other fats
    Fats,
    /// Culinary and medicinal spices
    Spices,
    /// Concentrated protein sources
    Proteins,
    /// Tree nuts
    Nuts,
    /// Edible seeds
    Seeds,
}

impl FoodCategory {
    /// Canonical display name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grains => "Grains",
            Self::Pulses => "Pulses",
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Dairy => "Dairy",
            Self::Fats => "Fats",
            Self::Spices => "Spices",
            Self::Proteins => "Proteins",
            Self::Nuts => "Nuts",
            Self::Seeds => "Seeds",
        }
    }
}

impl FromStr for FoodCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Grains" => Ok(Self::Grains),
            "Pulses" => Ok(Self::Pulses),
            "Vegetables" => Ok(Self::Vegetables),
            "Fruits" => Ok(Self::Fruits),
            "Dairy" => Ok(Self::Dairy),
            "Fats" => Ok(Self::Fats),
            "Spices" => Ok(Self::Spices),
            "Proteins" => Ok(Self::Proteins),
            "Nuts" => Ok(Self::Nuts),
            "Seeds" => Ok(Self::Seeds),
            other => Err(AppError::invalid_format(format!(
                "unrecognized food category: {other}"
            ))),
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ayurvedic taste classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rasa {
    /// Madhura
    Sweet,
    /// Amla
    Sour,
    /// Lavana
    Salty,
    /// Katu
    Pungent,
    /// Tikta
    Bitter,
    /// Kashaya
    Astringent,
}

impl Rasa {
    /// Canonical display name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sweet => "Sweet",
            Self::Sour => "Sour",
            Self::Salty => "Salty",
            Self::Pungent => "Pungent",
            Self::Bitter => "Bitter",
            Self::Astringent => "Astringent",
        }
    }
}

impl FromStr for Rasa {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Sweet" => Ok(Self::Sweet),
            "Sour" => Ok(Self::Sour),
            "Salty" => Ok(Self::Salty),
            "Pungent" => Ok(Self::Pungent),
            "Bitter" => Ok(Self::Bitter),
            "Astringent" => Ok(Self::Astringent),
            other => Err(AppError::invalid_format(format!(
                "unrecognized rasa: {other}"
            ))),
        }
    }
}

impl fmt::Display for Rasa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ayurvedic quality classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Guna {
    /// Guru
    Heavy,
    /// Laghu
    Light,
    /// Snigdha
    Oily,
    /// Ruksha
    Dry,
    /// Ushna
    Hot,
    /// Shita
    Cold,
}

impl Guna {
    /// Canonical display name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Heavy => "Heavy",
            Self::Light => "Light",
            Self::Oily => "Oily",
            Self::Dry => "Dry",
            Self::Hot => "Hot",
            Self::Cold => "Cold",
        }
    }
}

impl FromStr for Guna {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Heavy" => Ok(Self::Heavy),
            "Light" => Ok(Self::Light),
            "Oily" => Ok(Self::Oily),
            "Dry" => Ok(Self::Dry),
            "Hot" => Ok(Self::Hot),
            "Cold" => Ok(Self::Cold),
            other => Err(AppError::invalid_format(format!(
                "unrecognized guna: {other}"
            ))),
        }
    }
}

impl fmt::Display for Guna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ayurvedic potency (heating/cooling effect)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Virya {
    /// Heating potency
    Hot,
    /// Cooling potency
    Cold,
}

impl FromStr for Virya {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Hot" => Ok(Self::Hot),
            "Cold" => Ok(Self::Cold),
            other => Err(AppError::invalid_format(format!(
                "unrecognized virya: {other}"
            ))),
        }
    }
}

impl fmt::Display for Virya {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hot => "Hot",
            Self::Cold => "Cold",
        })
    }
}

/// Ayurvedic post-digestive effect
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Vipaka {
    /// Madhura vipaka
    Sweet,
    /// Amla vipaka
    Sour,
    /// Katu vipaka
    Pungent,
}

impl FromStr for Vipaka {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Sweet" => Ok(Self::Sweet),
            "Sour" => Ok(Self::Sour),
            "Pungent" => Ok(Self::Pungent),
            other => Err(AppError::invalid_format(format!(
                "unrecognized vipaka: {other}"
            ))),
        }
    }
}

impl fmt::Display for Vipaka {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sweet => "Sweet",
            Self::Sour => "Sour",
            Self::Pungent => "Pungent",
        })
    }
}

/// One or more tastes, written as a slash-joined combination (`Bitter/Pungent`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RasaProfile(Vec<Rasa>);

impl RasaProfile {
    /// Build from at least one taste
    pub fn new(tastes: Vec<Rasa>) -> Result<Self, AppError> {
        if tastes.is_empty() {
            return Err(AppError::missing_field("rasa"));
        }
        Ok(Self(tastes))
    }

    /// Component tastes in declaration order
    pub fn tastes(&self) -> &[Rasa] {
        &self.0
    }
}

impl From<Rasa> for RasaProfile {
    fn from(rasa: Rasa) -> Self {
        Self(vec![rasa])
    }
}

impl FromStr for RasaProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tastes = s
            .split('/')
            .map(Rasa::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tastes)
    }
}

impl TryFrom<String> for RasaProfile {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RasaProfile> for String {
    fn from(profile: RasaProfile) -> Self {
        profile.to_string()
    }
}

impl fmt::Display for RasaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&joined)
    }
}

/// One or more qualities, written as a slash-joined combination (`Heavy/Oily`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GunaProfile(Vec<Guna>);

impl GunaProfile {
    /// Build from at least one quality
    pub fn new(qualities: Vec<Guna>) -> Result<Self, AppError> {
        if qualities.is_empty() {
            return Err(AppError::missing_field("guna"));
        }
        Ok(Self(qualities))
    }

    /// Component qualities in declaration order
    pub fn qualities(&self) -> &[Guna] {
        &self.0
    }
}

impl From<Guna> for GunaProfile {
    fn from(guna: Guna) -> Self {
        Self(vec![guna])
    }
}

impl FromStr for GunaProfile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let qualities = s
            .split('/')
            .map(Guna::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(qualities)
    }
}

impl TryFrom<String> for GunaProfile {
    type Error = AppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<GunaProfile> for String {
    fn from(profile: GunaProfile) -> Self {
        profile.to_string()
    }
}

impl fmt::Display for GunaProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&joined)
    }
}

/// Macro-nutrient values per 100 g of the food
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProfile {
    /// Energy in kcal per 100 g
    pub calories: f64,
    /// Protein in grams per 100 g
    pub protein: f64,
    /// Carbohydrates in grams per 100 g
    pub carbs: f64,
    /// Fat in grams per 100 g
    pub fat: f64,
    /// Dietary fiber in grams per 100 g
    pub fiber: f64,
}

impl MacroProfile {
    /// Build a validated macro profile; every value must be finite and non-negative
    pub fn new(
        calories: f64,
        protein: f64,
        carbs: f64,
        fat: f64,
        fiber: f64,
    ) -> Result<Self, AppError> {
        for (label, value) in [
            ("calories", calories),
            ("protein", protein),
            ("carbs", carbs),
            ("fat", fat),
            ("fiber", fiber),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "{label} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        })
    }
}

/// A food catalog entry with per-100 g macros and Ayurvedic attributes
///
/// Immutable once added to the catalog. Meal entries embed their own copy, so
/// later catalog edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog identity
    pub id: u64,
    /// Food name
    pub name: String,
    /// Catalog category
    pub category: FoodCategory,
    /// Macro values per 100 g
    #[serde(flatten)]
    pub macros: MacroProfile,
    /// Taste classification
    pub rasa: RasaProfile,
    /// Quality classification
    pub guna: GunaProfile,
    /// Potency (heating/cooling)
    pub virya: Virya,
    /// Post-digestive effect
    pub vipaka: Vipaka,
    /// Free-text dosha balancing description, e.g. `Balances Vata & Pitta`
    #[serde(rename = "dosha")]
    pub dosha_effect: String,
}

impl FoodItem {
    /// Build a validated food item; the name must be non-empty
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: FoodCategory,
        macros: MacroProfile,
        rasa: RasaProfile,
        guna: GunaProfile,
        virya: Virya,
        vipaka: Vipaka,
        dosha_effect: impl Into<String>,
    ) -> Result<Self, AppError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        Ok(Self {
            id,
            name,
            category,
            macros,
            rasa,
            guna,
            virya,
            vipaka,
            dosha_effect: dosha_effect.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for name in [
            "Grains",
            "Pulses",
            "Vegetables",
            "Fruits",
            "Dairy",
            "Fats",
            "Spices",
            "Proteins",
            "Nuts",
            "Seeds",
        ] {
            let category: FoodCategory = name.parse().unwrap();
            assert_eq!(category.to_string(), name);
        }
        assert!("Snacks".parse::<FoodCategory>().is_err());
    }

    #[test]
    fn test_rasa_profile_combination() {
        let profile: RasaProfile = "Bitter/Pungent".parse().unwrap();
        assert_eq!(profile.tastes(), &[Rasa::Bitter, Rasa::Pungent]);
        assert_eq!(profile.to_string(), "Bitter/Pungent");
        assert!("Bitter/Umami".parse::<RasaProfile>().is_err());
    }

    #[test]
    fn test_macro_profile_rejects_negative() {
        assert!(MacroProfile::new(130.0, -1.0, 28.0, 0.3, 0.4).is_err());
        assert!(MacroProfile::new(f64::NAN, 0.0, 0.0, 0.0, 0.0).is_err());
        assert!(MacroProfile::new(0.0, 0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_food_item_json_shape() {
        let item = FoodItem::new(
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
        .unwrap();

        let json = serde_json::to_value(&item).unwrap();
        // Macros flatten into the record and the effect text keeps its wire name
        assert_eq!(json["calories"], 130.0);
        assert_eq!(json["dosha"], "Balances Vata & Pitta");

        let back: FoodItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}

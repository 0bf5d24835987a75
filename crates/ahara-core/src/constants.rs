// ABOUTME: Domain constants organized by concern
// ABOUTME: Suggestion thresholds, nutrient scaling basis, and remote lookup contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! Application-wide constants organized by domain.

/// Nutrient scaling basis
pub mod nutrition {
    /// Catalog macro values are expressed per this many grams
    pub const REFERENCE_PORTION_G: f64 = 100.0;
}

/// Suggestion bucket thresholds (per 100 g catalog values)
pub mod suggestions {
    /// Minimum protein for the High Protein bucket (grams per 100 g)
    pub const HIGH_PROTEIN_MIN_G: f64 = 10.0;
    /// Maximum calories for the Low Calorie bucket (kcal per 100 g)
    pub const LOW_CALORIE_MAX_KCAL: f64 = 100.0;
    /// Minimum fiber for the High Fiber bucket (grams per 100 g)
    pub const HIGH_FIBER_MIN_G: f64 = 5.0;
    /// Per-bucket display cap
    pub const DISPLAY_CAP: usize = 3;
}

/// Dosha-effect text matching
pub mod dosha {
    /// Literal marker a dosha-effect description uses for universally suitable foods
    pub const ALL_DOSHAS_MARKER: &str = "all Doshas";
}

/// Remote nutrition lookup contract
pub mod lookup {
    /// The twelve fields a lookup response object must carry to be accepted
    pub const REQUIRED_FIELDS: [&str; 12] = [
        "name", "category", "calories", "protein", "carbs", "fat", "fiber", "rasa", "guna",
        "virya", "vipaka", "dosha",
    ];
}

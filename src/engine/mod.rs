// ABOUTME: Diet composition engine: filtering, suggestion buckets, and chart assembly
// ABOUTME: Synchronous in-memory transformations over patient, catalog, and selection state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # Diet Composition Engine
//!
//! The core business rules of the platform: allergy/dosha candidate
//! filtering, smart-suggestion bucketing, and diet-chart composition with
//! frozen nutrient snapshots. Everything here is synchronous and side-effect
//! free; stores and the remote lookup live elsewhere.

/// Allergy safety and dosha suitability filtering
pub mod filter;

/// Smart suggestion buckets with display caps
pub mod suggestions;

/// Chart composer: entry accumulation, totals, finalization
pub mod composer;

pub use composer::ChartComposer;
pub use filter::{
    is_allergy_excluded, is_dosha_suitable, safe_candidates, search_candidates,
    suggestion_candidates,
};
pub use suggestions::{build_suggestions, SuggestionCategory, SuggestionSet};

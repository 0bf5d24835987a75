// ABOUTME: Core data models for the Ahara diet platform
// ABOUTME: Re-exports FoodItem, PatientProfile, DietChart and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # Data Models
//!
//! Core data structures shared across the engine, stores, and services.
//!
//! ## Design Principles
//!
//! - **Closed enumerations**: category, rasa, guna, virya, vipaka, meal slot,
//!   and dosha type are sum types; unrecognized text is rejected at the store
//!   boundary instead of propagating silently
//! - **Validated construction**: field presence and numeric ranges are
//!   enforced in constructors, not left implicit
//! - **Frozen snapshots**: meal entries embed the food and its scaled
//!   nutrients at add time; catalog edits never rewrite history
//! - **Serializable**: every model round-trips through JSON for the
//!   whole-collection stores

// Domain modules
mod chart;
mod food;
mod patient;
mod payment;
mod progress;

// Re-export all public types for convenience
// Food catalog domain
pub use food::{
    FoodCategory, FoodItem, Guna, GunaProfile, MacroProfile, Rasa, RasaProfile, Vipaka, Virya,
};

// Patient domain
pub use patient::{DietPreference, Dosha, DoshaType, Gender, LifestyleProfile, PatientProfile};

// Diet chart domain
pub use chart::{
    group_by_slot, DietChart, MealEntry, MealSlot, NutrientTotals, PatientRef, PractitionerRef,
};

// Progress and payments
pub use payment::{PaymentRecord, PaymentStatus};
pub use progress::ProgressEntry;

// ABOUTME: Record store abstraction for whole-collection persistence
// ABOUTME: RecordStore trait with in-memory and JSON-file backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # Record Stores
//!
//! The platform persists five logical collections — the food catalog,
//! patients, diet charts, progress entries, and payment records — and reads
//! and writes each one wholesale. There is no partial update and no query
//! language; filtering happens in the engine. The trait seam keeps the
//! engine and services testable against [`MemoryStore`] without any concrete
//! backend.
//!
//! No cross-session consistency is guaranteed: two writers replacing the
//! same collection concurrently will silently overwrite each other.

use ahara_core::errors::AppResult;
use ahara_core::models::{DietChart, FoodItem, PatientProfile, PaymentRecord, ProgressEntry};
use async_trait::async_trait;

pub mod memory;
pub mod seed;

mod json;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

/// Whole-collection persistence seam
///
/// All store implementations must implement this trait to provide a
/// consistent interface for the service layer. Failures map to
/// `ErrorCode::StorageError`; callers log them and retain prior in-memory
/// state.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full food catalog
    async fn read_foods(&self) -> AppResult<Vec<FoodItem>>;

    /// Replace the full food catalog
    async fn replace_foods(&self, foods: Vec<FoodItem>) -> AppResult<()>;

    /// Read all registered patients
    async fn read_patients(&self) -> AppResult<Vec<PatientProfile>>;

    /// Replace all registered patients
    async fn replace_patients(&self, patients: Vec<PatientProfile>) -> AppResult<()>;

    /// Read all saved diet charts
    async fn read_charts(&self) -> AppResult<Vec<DietChart>>;

    /// Replace all saved diet charts
    async fn replace_charts(&self, charts: Vec<DietChart>) -> AppResult<()>;

    /// Read all patient progress entries
    async fn read_progress(&self) -> AppResult<Vec<ProgressEntry>>;

    /// Replace all patient progress entries
    async fn replace_progress(&self, entries: Vec<ProgressEntry>) -> AppResult<()>;

    /// Read all payment records
    async fn read_payments(&self) -> AppResult<Vec<PaymentRecord>>;

    /// Replace all payment records
    async fn replace_payments(&self, payments: Vec<PaymentRecord>) -> AppResult<()>;
}

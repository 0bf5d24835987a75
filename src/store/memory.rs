// ABOUTME: In-memory record store backed by tokio RwLocks
// ABOUTME: Used by tests and as the working-set cache for the services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use ahara_core::errors::AppResult;
use ahara_core::models::{DietChart, FoodItem, PatientProfile, PaymentRecord, ProgressEntry};
use async_trait::async_trait;
use tokio::sync::RwLock;

use super::RecordStore;

/// In-memory store; collections live in `RwLock`-guarded vectors
///
/// Reads clone the full collection, matching the whole-collection contract of
/// [`RecordStore`]. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    foods: RwLock<Vec<FoodItem>>,
    patients: RwLock<Vec<PatientProfile>>,
    charts: RwLock<Vec<DietChart>>,
    progress: RwLock<Vec<ProgressEntry>>,
    payments: RwLock<Vec<PaymentRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn read_foods(&self) -> AppResult<Vec<FoodItem>> {
        Ok(self.foods.read().await.clone())
    }

    async fn replace_foods(&self, foods: Vec<FoodItem>) -> AppResult<()> {
        *self.foods.write().await = foods;
        Ok(())
    }

    async fn read_patients(&self) -> AppResult<Vec<PatientProfile>> {
        Ok(self.patients.read().await.clone())
    }

    async fn replace_patients(&self, patients: Vec<PatientProfile>) -> AppResult<()> {
        *self.patients.write().await = patients;
        Ok(())
    }

    async fn read_charts(&self) -> AppResult<Vec<DietChart>> {
        Ok(self.charts.read().await.clone())
    }

    async fn replace_charts(&self, charts: Vec<DietChart>) -> AppResult<()> {
        *self.charts.write().await = charts;
        Ok(())
    }

    async fn read_progress(&self) -> AppResult<Vec<ProgressEntry>> {
        Ok(self.progress.read().await.clone())
    }

    async fn replace_progress(&self, entries: Vec<ProgressEntry>) -> AppResult<()> {
        *self.progress.write().await = entries;
        Ok(())
    }

    async fn read_payments(&self) -> AppResult<Vec<PaymentRecord>> {
        Ok(self.payments.read().await.clone())
    }

    async fn replace_payments(&self, payments: Vec<PaymentRecord>) -> AppResult<()> {
        *self.payments.write().await = payments;
        Ok(())
    }
}

// ABOUTME: JSON file store persisting each collection as a pretty-printed array
// ABOUTME: Missing files read as empty collections; writes replace the file wholesale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use std::path::{Path, PathBuf};

use ahara_core::errors::{AppError, AppResult};
use ahara_core::models::{DietChart, FoodItem, PatientProfile, PaymentRecord, ProgressEntry};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::RecordStore;

const FOODS_FILE: &str = "foods.json";
const PATIENTS_FILE: &str = "patients.json";
const CHARTS_FILE: &str = "charts.json";
const PROGRESS_FILE: &str = "progress.json";
const PAYMENTS_FILE: &str = "payments.json";

/// File-backed store: one JSON array per collection under a data directory
///
/// A collection whose file does not exist yet reads as empty; every other I/O
/// or parse failure surfaces as `ErrorCode::StorageError` so callers can keep
/// their in-memory state and report the fault.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            AppError::storage(format!(
                "failed to create data directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    /// Data directory this store writes under
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read_collection<T: DeserializeOwned>(&self, file: &str) -> AppResult<Vec<T>> {
        let path = self.dir.join(file);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "collection file absent, reading as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::storage(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| AppError::storage(format!("failed to parse {}: {e}", path.display())))
    }

    async fn write_collection<T: Serialize>(&self, file: &str, records: &[T]) -> AppResult<()> {
        let path = self.dir.join(file);
        let payload = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&path, payload).await.map_err(|e| {
            AppError::storage(format!("failed to write {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), count = records.len(), "replaced collection");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn read_foods(&self) -> AppResult<Vec<FoodItem>> {
        self.read_collection(FOODS_FILE).await
    }

    async fn replace_foods(&self, foods: Vec<FoodItem>) -> AppResult<()> {
        self.write_collection(FOODS_FILE, &foods).await
    }

    async fn read_patients(&self) -> AppResult<Vec<PatientProfile>> {
        self.read_collection(PATIENTS_FILE).await
    }

    async fn replace_patients(&self, patients: Vec<PatientProfile>) -> AppResult<()> {
        self.write_collection(PATIENTS_FILE, &patients).await
    }

    async fn read_charts(&self) -> AppResult<Vec<DietChart>> {
        self.read_collection(CHARTS_FILE).await
    }

    async fn replace_charts(&self, charts: Vec<DietChart>) -> AppResult<()> {
        self.write_collection(CHARTS_FILE, &charts).await
    }

    async fn read_progress(&self) -> AppResult<Vec<ProgressEntry>> {
        self.read_collection(PROGRESS_FILE).await
    }

    async fn replace_progress(&self, entries: Vec<ProgressEntry>) -> AppResult<()> {
        self.write_collection(PROGRESS_FILE, &entries).await
    }

    async fn read_payments(&self) -> AppResult<Vec<PaymentRecord>> {
        self.read_collection(PAYMENTS_FILE).await
    }

    async fn replace_payments(&self, payments: Vec<PaymentRecord>) -> AppResult<()> {
        self.write_collection(PAYMENTS_FILE, &payments).await
    }
}

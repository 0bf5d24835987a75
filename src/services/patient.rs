// ABOUTME: Patient portal workflows: own charts, progress logging, payments
// ABOUTME: Chart ownership matches by patient id or the email frozen in the chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use std::sync::Arc;

use ahara_core::errors::AppResult;
use ahara_core::models::{
    DietChart, PatientProfile, PaymentRecord, PaymentStatus, ProgressEntry,
};
use chrono::NaiveDate;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::store::RecordStore;

/// Patient-facing service over the shared record store
pub struct PatientPortalService {
    store: Arc<dyn RecordStore>,
}

impl PatientPortalService {
    /// Create a portal service over a store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Charts belonging to this patient, newest first
    ///
    /// Ownership matches on the patient id frozen into the chart, or on the
    /// frozen email snapshot when the id predates the patient's registration.
    pub async fn charts_for(&self, patient: &PatientProfile) -> AppResult<Vec<DietChart>> {
        let mut charts: Vec<DietChart> = self
            .store
            .read_charts()
            .await?
            .into_iter()
            .filter(|chart| {
                chart.patient.id == patient.id
                    || (patient.email.is_some() && chart.patient.email == patient.email)
            })
            .collect();
        charts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(charts)
    }

    /// Log a daily progress entry
    #[instrument(skip(self, notes))]
    pub async fn log_progress(
        &self,
        patient_id: Uuid,
        date: NaiveDate,
        weight_kg: Option<f64>,
        meals_completed: u8,
        energy_level: u8,
        notes: &str,
    ) -> AppResult<ProgressEntry> {
        let entry = ProgressEntry::new(
            patient_id,
            date,
            weight_kg,
            meals_completed,
            energy_level,
            notes,
        )?;
        let mut entries = self.store.read_progress().await?;
        entries.push(entry.clone());
        self.store.replace_progress(entries).await?;
        info!(patient = %patient_id, %date, "logged progress entry");
        Ok(entry)
    }

    /// Progress history for a patient, oldest first
    pub async fn progress_for(&self, patient_id: Uuid) -> AppResult<Vec<ProgressEntry>> {
        let mut entries: Vec<ProgressEntry> = self
            .store
            .read_progress()
            .await?
            .into_iter()
            .filter(|entry| entry.patient_id == patient_id)
            .collect();
        entries.sort_by_key(|entry| entry.date);
        Ok(entries)
    }

    /// Record a payment for a consultation or service
    #[instrument(skip(self, service))]
    pub async fn record_payment(
        &self,
        patient_id: Uuid,
        practitioner_id: Uuid,
        amount: f64,
        service: &str,
        status: PaymentStatus,
    ) -> AppResult<PaymentRecord> {
        let payment = PaymentRecord::new(patient_id, practitioner_id, amount, service, status)?;
        let mut payments = self.store.read_payments().await?;
        payments.push(payment.clone());
        self.store.replace_payments(payments).await?;
        info!(patient = %patient_id, amount, "recorded payment");
        Ok(payment)
    }

    /// Payment history for a patient, newest first
    pub async fn payments_for(&self, patient_id: Uuid) -> AppResult<Vec<PaymentRecord>> {
        let mut payments: Vec<PaymentRecord> = self
            .store
            .read_payments()
            .await?
            .into_iter()
            .filter(|payment| payment.patient_id == patient_id)
            .collect();
        payments.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(payments)
    }
}

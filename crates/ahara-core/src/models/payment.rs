// ABOUTME: Locally fabricated payment records for consultation services
// ABOUTME: PaymentRecord and PaymentStatus definitions, not financially authoritative
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Settlement state of a payment record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Recorded but not settled
    Pending,
    /// Settled
    Completed,
    /// Abandoned or declined
    Failed,
}

/// A locally recorded payment
///
/// There is no payment-gateway integration; these records track what was
/// agreed between patient and practitioner and are not financially
/// authoritative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRecord {
    /// Record identity
    pub id: Uuid,
    /// Paying patient
    pub patient_id: Uuid,
    /// Receiving practitioner
    pub practitioner_id: Uuid,
    /// Amount in the practice's currency
    pub amount: f64,
    /// What the payment was for, e.g. `Diet Consultation`
    pub service: String,
    /// When the record was created
    pub recorded_at: DateTime<Utc>,
    /// Settlement state
    pub status: PaymentStatus,
}

impl PaymentRecord {
    /// Record a payment; the amount must be positive and the service label
    /// non-empty
    pub fn new(
        patient_id: Uuid,
        practitioner_id: Uuid,
        amount: f64,
        service: impl Into<String>,
        status: PaymentStatus,
    ) -> Result<Self, AppError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::out_of_range(format!(
                "amount must be positive, got {amount}"
            )));
        }
        let service = service.into();
        if service.trim().is_empty() {
            return Err(AppError::missing_field("service"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            patient_id,
            practitioner_id,
            amount,
            service,
            recorded_at: Utc::now(),
            status,
        })
    }
}

// ABOUTME: Service layer orchestrating engine, stores, and the nutrition lookup
// ABOUTME: Practitioner-facing and patient-facing workflows over the RecordStore seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

//! # Services
//!
//! Two service facades own the workflows: [`PractitionerService`] covers
//! patient registration, catalog management, chart composition and saving;
//! [`PatientPortalService`] covers a patient's own view of charts, progress
//! logging, and payment records. Both hold an `Arc<dyn RecordStore>` and do
//! all filtering in memory over whole collections.

pub mod patient;
pub mod practitioner;

pub use patient::PatientPortalService;
pub use practitioner::{DashboardSummary, PractitionerService};

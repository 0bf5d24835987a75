// ABOUTME: Main library entry point for the Ahara diet management platform
// ABOUTME: Ayurvedic diet composition, persistence, and nutrition lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

#![deny(unsafe_code)]

//! # Ahara
//!
//! A clinical diet-management platform combining modern nutrition data with
//! ayurvedic dietary principles. Practitioners register patients, compose
//! per-meal diet charts from a curated food catalog, and resolve unknown
//! foods through an AI-backed nutrition lookup; patients review their charts
//! and log daily progress.
//!
//! ## Architecture
//!
//! - **Engine**: allergy/dosha filtering, suggestion buckets, chart
//!   composition with frozen nutrient snapshots
//! - **Store**: whole-collection persistence behind the [`store::RecordStore`]
//!   seam, with in-memory and JSON-file backends
//! - **Lookup**: twelve-field nutrition payloads from any OpenAI-compatible
//!   chat-completions endpoint
//! - **Services**: practitioner and patient workflows tying the above
//!   together
//!
//! Core data types and errors live in the `ahara-core` crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use ahara::services::PractitionerService;
//! use ahara::store::MemoryStore;
//! use ahara_core::errors::AppResult;
//! use ahara_core::models::PractitionerRef;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let practitioner = PractitionerRef {
//!         id: Uuid::new_v4(),
//!         name: "Meera Iyer".into(),
//!     };
//!     let service = PractitionerService::new(practitioner, Arc::new(MemoryStore::new()));
//!     let catalog = service.catalog().await?;
//!     println!("{} foods in catalog", catalog.len());
//!     Ok(())
//! }
//! ```

/// Diet composition engine: filtering, suggestions, chart assembly
pub mod engine;

/// Structured logging configuration
pub mod logging;

/// Remote nutrition lookup providers
pub mod lookup;

/// Practitioner and patient workflow services
pub mod services;

/// Record store trait and backends
pub mod store;

pub use ahara_core::errors::{AppError, AppResult, ErrorCode};
pub use ahara_core::models;

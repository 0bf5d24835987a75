// ABOUTME: Core types and constants for the Ahara diet-management platform
// ABOUTME: Foundation crate with domain models, error taxonomy, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ahara Health

#![deny(unsafe_code)]

//! # Ahara Core
//!
//! Foundation crate providing shared types for the Ahara diet-management
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace. It contains no async
//! code and performs no I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with [`AppError`](errors::AppError) and [`ErrorCode`](errors::ErrorCode)
//! - **constants**: Domain thresholds and lookup contract constants
//! - **models**: Core data models (`FoodItem`, `PatientProfile`, `DietChart`, etc.)

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models (food catalog, patients, diet charts, progress, payments)
pub mod models;

//! # Holiday Analyzer Backend
//!
//! Holiday population load analysis engine.
//!
//! This crate provides a Rust backend that aggregates public holidays and
//! school breaks into population load curves, detects the yearly peak
//! vacation period, and imports public holiday data from the Nager.Date
//! provider. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Reference Data**: Countries and regions with population figures
//! - **Holiday Import**: Public holiday ingestion with checksum-based dedup
//! - **Load Aggregation**: Daily and weekly population load series
//! - **Peak Detection**: Threshold-based peak vacation period expansion
//! - **HTTP API**: RESTful endpoints with token-guarded admin surface
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`db`]: Repository pattern, in-memory store, and seed data
//! - [`services`]: Load aggregation, analysis, and import logic
//! - [`clients`]: Public holiday provider client
//! - [`auth`]: Token issuance and validation
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

//! # Domain Module
//!
//! Contains all business logic for the expense tracker.
//!
//! This module encapsulates the core rules, models, and services that
//! define how expenses are recorded, persisted, and summarized. It operates
//! independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **expense_service**: the store. Owns the canonical collection:
//!   validated add, positional delete, best-effort load
//! - **summary_service**: pure aggregation (category, overall, time
//!   buckets, report data)
//! - **export_service**: report rendering and CSV export
//! - **commands**: internal command types consumed by the services
//! - **models**: domain entities and the error taxonomy
//!
//! ## Business Rules
//!
//! - Amounts must parse as numbers; amount, category, and date must be
//!   non-blank
//! - Each expense is timestamped at creation for time-bucket summaries
//! - The collection persists in full after every add or delete
//! - Category matching in summaries is case-insensitive

pub mod commands;
pub mod expense_service;
pub mod export_service;
pub mod models;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use export_service::ExportService;
pub use summary_service::SummaryService;

//! Expense Tracker - command-line personal expense tracking
//!
//! This library provides the core functionality for the `expense` binary:
//! dated expense records, a spending budget per calendar month, and spending
//! totals.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::ExpensePaths;
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(&ExpensePaths::new(None)?)?;
//! let added = ExpenseService::new(&storage).add(Some("Coffee"), Some(amount), Some(5))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ExpenseError;

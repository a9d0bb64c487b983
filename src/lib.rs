//! centavo - Command-line personal finance ledger
//!
//! This library provides the core functionality for the centavo ledger
//! application: append income and expense entries, remove them by row,
//! and view the running income / expense / balance totals. Entries persist
//! as a single JSON document rewritten after every mutation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, dates, transactions, the ledger)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (validation and normalization)
//! - `display`: Terminal formatting (table and summary block)
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use centavo::config::{CentavoPaths, Settings};
//! use centavo::storage::Storage;
//!
//! let paths = CentavoPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CentavoError, CentavoResult};

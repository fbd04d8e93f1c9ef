//! Core types for the COVID-19 & Sustainability dashboard.
//!
//! - [`indicator`]: the closed vocabulary of chartable columns
//! - [`table`]: CSV loading into an immutable row-per-country table
//! - [`dataset`]: a table validated against the vocabulary
//!
//! # Usage
//!
//! ```rust
//! use cssi_core::{Dataset, Indicator};
//!
//! let dataset = Dataset::embedded().unwrap();
//! let brazil = dataset.rows().iter().find(|r| r.country == "Brazil").unwrap();
//! assert!(dataset.value(brazil, Indicator::Cases).is_some());
//! ```

pub mod dataset;
pub mod error;
pub mod indicator;
pub mod table;

pub use dataset::Dataset;
pub use error::{CoreError, Result};
pub use indicator::Indicator;
pub use table::{Cell, Row, Table, COUNTRY_COLUMN};

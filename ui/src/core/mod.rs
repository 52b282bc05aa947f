//! Data layer for the rental report: loading, aggregation, filtering and formatting.
//! Nothing in here touches Dioxus, so every piece is testable on its own.

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod format;

pub use error::{DatasetError, Result};

//! Shared utilities for tabscope crates.
//!
//! This crate provides common utilities used across the workspace,
//! including Polars value conversions and fixed-precision number rendering.

pub mod number;
pub mod values;

// Re-export commonly used functions at crate root for convenience
pub use number::format_number;
pub use values::{any_to_cell, any_to_count, any_to_f64, any_to_string, format_numeric, parse_f64};

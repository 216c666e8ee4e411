//! Data model shared across the tabscope crates.
//!
//! - **column**: declared column types
//! - **cell**: engine-independent cell values
//! - **profile**: the dataset profile and its response envelope

pub mod cell;
pub mod column;
pub mod profile;

pub use cell::CellValue;
pub use column::{ColumnDecl, ColumnType};
pub use profile::{Profile, ProfileResponse, Statistic};

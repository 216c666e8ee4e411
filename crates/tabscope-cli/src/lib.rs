//! CLI library components for tabscope.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;

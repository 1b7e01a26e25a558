//! CLI utilities for foldmatch tools
//!
//! Provides shared CLI functionality:
//! - Terminal output formatting
//! - Match matrix rendering
//! - Progress indicators

#![warn(missing_docs)]

pub mod output;
pub mod progress;

//! Infrastructure layer
//!
//! This module handles external integrations:
//! - Tabular file reading and writing
//! - CLI argument processing
//! - Configuration loading
//! - TUI foundation (real terminal and test backend)

pub mod cli;
pub mod config;
pub mod tabular;
pub mod tui;

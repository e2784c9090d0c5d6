//! Integration layer
//!
//! Wires the Elm core to the terminal:
//! - `Runtime` owns the state and the message/command queues
//! - `AppRunner` feeds terminal events into the runtime and renders
//! - `report` answers `--progress` without a terminal

pub mod app_runner;
pub mod report;
pub mod runtime;

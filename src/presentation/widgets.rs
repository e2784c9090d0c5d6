//! Reusable UI widgets
//!
//! Widgets know nothing about `AppState`; components build them from state.

pub mod decision_bar;
pub mod highlighted_text;
pub mod record;
pub mod status_bar;

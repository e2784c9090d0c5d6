//! UI configuration
//!
//! This module contains configuration for UI appearance and behavior.

pub mod keybindings;
pub mod styles;

// Re-export for convenience
pub use keybindings::KeyBindings;
pub use styles::Styles;

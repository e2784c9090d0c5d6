//! # litriage - literature review triage in the terminal
//!
//! Walks through a bibliographic spreadsheet one record at a time, shows the
//! abstract with review keywords highlighted, and records an include, exclude
//! or discuss decision per row in the `Inclusion`/`Exclusion` columns.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (file I/O, terminal control)
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use std::path::PathBuf;
//!
//! use litriage::{
//!     core::{msg::review::ReviewMsg, state::AppState},
//!     domain::{decision::ReviewAction, review::SessionPhase, table::RecordTable},
//!     infrastructure::tabular::FileFormat,
//!     update, Msg,
//! };
//!
//! let table = RecordTable::new(
//!     vec!["Title".into(), "Publication Title".into()],
//!     vec![vec!["Boards and ethics".into(), "Journal".into()]],
//! );
//! let (state, _) = update(
//!     Msg::Review(ReviewMsg::TableLoaded {
//!         path: PathBuf::from("refs.csv"),
//!         format: FileFormat::Csv,
//!         table,
//!     }),
//!     AppState::default(),
//! );
//! let (state, _) = update(Msg::Review(ReviewMsg::Apply(ReviewAction::Include)), state);
//!
//! assert_eq!(state.phase(), SessionPhase::Complete);
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - Table model, decisions, highlighting and the review cursor
//! - [`core`] - State, messages, update and command execution
//! - [`infrastructure`] - Tabular file I/O, CLI, configuration and terminal
//! - [`integration`] - Runtime and app runner
//! - [`presentation`] - Components, widgets, styles and keybindings

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::{app_runner::AppRunner, runtime::Runtime};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

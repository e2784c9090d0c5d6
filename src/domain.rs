//! Domain logic
//!
//! This module contains the review logic, free of any I/O:
//! - Record table model
//! - Decisions and decision actions
//! - Keyword highlighting
//! - Cursor, classifier and review session

pub mod decision;
pub mod highlight;
pub mod review;
pub mod table;

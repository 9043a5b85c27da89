//! Shared building blocks for the skill duration engine.
//!
//! Holds the data model (skill ids, experiences, intervals, computed
//! skills), the error type, month-granularity date helpers and the CLI
//! settings.

pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, SkillError};

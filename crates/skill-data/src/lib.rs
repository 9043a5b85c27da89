//! Skill duration engine.
//!
//! Responsible for reading experience payloads, grouping per-skill
//! intervals, merging overlapping ones and summing their month-spans.

pub mod aggregator;
pub mod analysis;
pub mod ingest;
pub mod merger;
pub mod reader;

pub use analysis::{analyze_experiences, compute_skills};
pub use skill_core as core;

//! Adapter layer for the skill duration engine.
//!
//! Maps request bodies onto the engine, shapes the `freelance` response
//! envelope with its status, and handles payload input and output for the
//! command-line front end.

pub mod handler;
pub mod io;

pub use skill_core as core;
pub use skill_data as data;

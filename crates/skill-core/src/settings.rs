use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::models::OverlapPolicy;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Compute per-skill experience durations from a freelancer payload
#[derive(Parser, Debug, Clone)]
#[command(
    name = "skill-duration",
    about = "Compute per-skill experience durations from a freelancer payload",
    version
)]
pub struct Settings {
    /// Payload file to read, `-` for stdin
    #[arg(long, short, default_value = "-")]
    pub input: String,

    /// Write the response to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Rule used to decide that two intervals of a skill overlap
    #[arg(long, default_value = "directional", value_parser = ["directional", "symmetric"])]
    pub overlap: String,

    /// Pretty-print the response JSON
    #[arg(long)]
    pub pretty: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and resolve derived values.
    pub fn load() -> Self {
        Self::parse().resolve()
    }

    /// Same as [`Settings::load`] with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args).resolve()
    }

    /// Apply the `--debug` flag.
    fn resolve(mut self) -> Self {
        if self.debug {
            self.log_level = "DEBUG".to_string();
        }
        self
    }

    /// Typed form of `--overlap`.
    pub fn overlap_policy(&self) -> Result<OverlapPolicy> {
        self.overlap.parse()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

//! Payload input and response output for the command-line front end.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use skill_core::settings::Settings;
use skill_core::{Result, SkillError};
use tracing::debug;

// ── InputSource ───────────────────────────────────────────────────────────────

/// Where the request payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects stdin, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "-" => InputSource::Stdin,
            path => InputSource::File(PathBuf::from(path)),
        }
    }

    /// Human-readable name for logs.
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

impl From<&Settings> for InputSource {
    fn from(settings: &Settings) -> Self {
        InputSource::from_arg(&settings.input)
    }
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Read the whole payload as text.
pub fn read_input(source: &InputSource) -> Result<String> {
    let raw = match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
        InputSource::File(path) => {
            std::fs::read_to_string(path).map_err(|source| SkillError::FileRead {
                path: path.clone(),
                source,
            })?
        }
    };

    debug!("Read {} bytes from {}", raw.len(), source.describe());
    Ok(raw)
}

/// Parse a request body. Blank input is treated as an absent body (`null`).
pub fn parse_body(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(raw)?)
}

/// Read and parse the payload from `source`.
pub fn read_payload(source: &InputSource) -> Result<Value> {
    parse_body(&read_input(source)?)
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Serialise a response body, compact or pretty.
pub fn render(body: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(body)?
    } else {
        serde_json::to_string(body)?
    };
    Ok(text)
}

/// Write `text` plus a trailing newline to `output`, or to stdout when
/// `output` is `None`. Parent directories are created as needed.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, format!("{}\n", text))?;
            debug!("Wrote response to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

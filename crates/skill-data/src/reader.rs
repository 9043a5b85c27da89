//! Payload extraction for the skill duration engine.
//!
//! Converts the raw `freelance` request body into typed
//! [`ExperienceRecord`]s. Every required field is checked here so the engine
//! downstream never sees a half-parsed experience; the first problem found
//! aborts the whole payload.

use serde_json::Value;
use skill_core::models::{ExperienceRecord, SkillId, SkillTag};
use skill_core::time_utils::parse_month;
use skill_core::{Result, SkillError};
use tracing::debug;

// ── Public types ──────────────────────────────────────────────────────────────

/// The parts of a `freelance` request body the engine needs.
#[derive(Debug, Clone, PartialEq)]
pub struct FreelancePayload {
    /// Freelancer id, echoed back verbatim in the response.
    pub freelancer_id: Value,
    /// Parsed experiences in payload order.
    pub experiences: Vec<ExperienceRecord>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Extract the freelancer id and experiences from a request body of shape
/// `{"freelance": {"id": .., "professionalExperiences": [..]}}`.
pub fn parse_payload(body: &Value) -> Result<FreelancePayload> {
    let freelance = require(body, "", "freelance")?;
    let freelancer_id = require(freelance, "freelance", "id")?.clone();
    let experiences = parse_experiences(require(
        freelance,
        "freelance",
        "professionalExperiences",
    )?)?;

    debug!(
        "Parsed payload for freelancer {}: {} experiences",
        freelancer_id,
        experiences.len()
    );

    Ok(FreelancePayload {
        freelancer_id,
        experiences,
    })
}

/// Parse a `professionalExperiences` array.
///
/// An empty array is valid and yields no records.
pub fn parse_experiences(value: &Value) -> Result<Vec<ExperienceRecord>> {
    let items = value.as_array().ok_or_else(|| SkillError::InvalidField {
        field: "professionalExperiences".to_string(),
        expected: "array".to_string(),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_experience(item, &format!("professionalExperiences[{}]", i)))
        .collect()
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn parse_experience(data: &Value, path: &str) -> Result<ExperienceRecord> {
    let start_date = parse_date_field(data, path, "startDate")?;
    let end_date = parse_date_field(data, path, "endDate")?;

    let skills_path = join(path, "skills");
    let skills = require(data, path, "skills")?
        .as_array()
        .ok_or_else(|| invalid(&skills_path, "array"))?
        .iter()
        .enumerate()
        .map(|(i, skill)| parse_skill(skill, &format!("{}[{}]", skills_path, i)))
        .collect::<Result<Vec<_>>>()?;

    Ok(ExperienceRecord {
        start_date,
        end_date,
        skills,
    })
}

fn parse_skill(data: &Value, path: &str) -> Result<SkillTag> {
    let id = match require(data, path, "id")? {
        Value::Number(n) => n
            .as_i64()
            .map(SkillId::Number)
            .ok_or_else(|| invalid(&join(path, "id"), "integer or string"))?,
        Value::String(s) => SkillId::Text(s.clone()),
        _ => return Err(invalid(&join(path, "id"), "integer or string")),
    };

    let name = require(data, path, "name")?
        .as_str()
        .ok_or_else(|| invalid(&join(path, "name"), "string"))?
        .to_string();

    Ok(SkillTag { id, name })
}

fn parse_date_field(data: &Value, path: &str, key: &str) -> Result<chrono::NaiveDate> {
    let field = join(path, key);
    let raw = require(data, path, key)?
        .as_str()
        .ok_or_else(|| invalid(&field, "date string"))?;

    parse_month(raw).ok_or_else(|| SkillError::DateParse {
        field,
        value: raw.to_string(),
    })
}

/// Look up `key` on `data`, treating an explicit `null` as absent.
fn require<'a>(data: &'a Value, path: &str, key: &str) -> Result<&'a Value> {
    data.get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| SkillError::MissingField(join(path, key)))
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn invalid(field: &str, expected: &str) -> SkillError {
    SkillError::InvalidField {
        field: field.to_string(),
        expected: expected.to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SkillError;
use crate::time_utils::month_span;

/// Opaque skill identifier as sent by the client.
///
/// Payloads carry either integer or string ids; the original JSON type is
/// kept so the response echoes ids back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillId::Number(n) => write!(f, "{}", n),
            SkillId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SkillId {
    fn from(n: i64) -> Self {
        SkillId::Number(n)
    }
}

impl From<&str> for SkillId {
    fn from(s: &str) -> Self {
        SkillId::Text(s.to_string())
    }
}

/// A skill tagged on one professional experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTag {
    pub id: SkillId,
    pub name: String,
}

/// One job from the freelancer's history, with dates already normalised to
/// month granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceRecord {
    /// First month of the experience.
    pub start_date: NaiveDate,
    /// Last month of the experience.
    pub end_date: NaiveDate,
    /// Skills exercised during the experience, in payload order.
    pub skills: Vec<SkillTag>,
}

/// A contiguous period during which one skill was used.
///
/// Intervals are never mutated once built: merging two of them yields a new
/// interval and the inputs are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillInterval {
    pub skill_id: SkillId,
    pub skill_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl SkillInterval {
    pub fn new(
        skill_id: SkillId,
        skill_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            skill_id,
            skill_name: skill_name.into(),
            start_date,
            end_date,
        }
    }

    /// Directional overlap: `true` when this interval starts strictly inside
    /// `other`.
    ///
    /// `a.overlaps(&b)` does not imply `b.overlaps(&a)`, so callers that want
    /// to know whether two intervals should merge must test both directions.
    pub fn overlaps(&self, other: &SkillInterval) -> bool {
        other.start_date < self.start_date && self.start_date < other.end_date
    }

    /// `true` when both intervals begin in the same month.
    pub fn shares_start(&self, other: &SkillInterval) -> bool {
        self.start_date == other.start_date
    }

    /// Whole calendar months covered by this interval.
    pub fn month_span(&self) -> i64 {
        month_span(self.start_date, self.end_date)
    }
}

/// Final per-skill result returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedSkill {
    pub id: SkillId,
    pub name: String,
    pub duration_in_months: i64,
}

/// How the merger decides that two intervals of one skill overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// One interval must start strictly inside the other; the merged interval
    /// takes the earlier start and the later interval's end.
    #[default]
    Directional,
    /// True interval intersection; the merged interval is the hull of both.
    Symmetric,
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapPolicy::Directional => f.write_str("directional"),
            OverlapPolicy::Symmetric => f.write_str("symmetric"),
        }
    }
}

impl FromStr for OverlapPolicy {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directional" => Ok(OverlapPolicy::Directional),
            "symmetric" => Ok(OverlapPolicy::Symmetric),
            other => Err(SkillError::Config(format!(
                "unknown overlap policy: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn react(start: NaiveDate, end: NaiveDate) -> SkillInterval {
        SkillInterval::new(SkillId::Number(1), "React", start, end)
    }

    // ── SkillInterval::overlaps ──────────────────────────────────────────────

    #[test]
    fn test_overlaps_is_directional() {
        let a = react(month(2018, 1), month(2018, 10));
        let b = react(month(2018, 5), month(2019, 9));

        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlaps_excludes_boundaries() {
        let a = react(month(2018, 1), month(2018, 10));
        let starts_at_end = react(month(2018, 10), month(2019, 3));
        let same_start = react(month(2018, 1), month(2018, 4));

        assert!(!starts_at_end.overlaps(&a));
        assert!(!same_start.overlaps(&a));
        assert!(!a.overlaps(&same_start));
    }

    #[test]
    fn test_overlaps_disjoint() {
        let a = react(month(2018, 1), month(2018, 10));
        let c = react(month(2017, 1), month(2017, 6));

        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_shares_start() {
        let a = react(month(2018, 1), month(2018, 10));
        let b = react(month(2018, 1), month(2019, 1));
        let c = react(month(2018, 2), month(2019, 1));

        assert!(a.shares_start(&b));
        assert!(!a.shares_start(&c));
    }

    // ── SkillInterval::month_span ────────────────────────────────────────────

    #[test]
    fn test_interval_month_span() {
        assert_eq!(react(month(2018, 1), month(2018, 10)).month_span(), 9);
        assert_eq!(react(month(2018, 5), month(2019, 9)).month_span(), 16);
    }

    // ── SkillId ──────────────────────────────────────────────────────────────

    #[test]
    fn test_skill_id_deserializes_number_and_text() {
        let n: SkillId = serde_json::from_value(serde_json::json!(241)).unwrap();
        let t: SkillId = serde_json::from_value(serde_json::json!("react")).unwrap();

        assert_eq!(n, SkillId::Number(241));
        assert_eq!(t, SkillId::Text("react".to_string()));
    }

    #[test]
    fn test_skill_id_serializes_as_original_type() {
        assert_eq!(serde_json::to_value(SkillId::from(241)).unwrap(), 241);
        assert_eq!(serde_json::to_value(SkillId::from("js")).unwrap(), "js");
    }

    #[test]
    fn test_skill_id_display() {
        assert_eq!(SkillId::from(370).to_string(), "370");
        assert_eq!(SkillId::from("mysql").to_string(), "mysql");
    }

    // ── ComputedSkill ────────────────────────────────────────────────────────

    #[test]
    fn test_computed_skill_wire_shape() {
        let skill = ComputedSkill {
            id: SkillId::from(241),
            name: "React".to_string(),
            duration_in_months: 28,
        };
        let value = serde_json::to_value(&skill).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 241, "name": "React", "durationInMonths": 28})
        );
    }

    // ── OverlapPolicy ────────────────────────────────────────────────────────

    #[test]
    fn test_overlap_policy_default_is_directional() {
        assert_eq!(OverlapPolicy::default(), OverlapPolicy::Directional);
    }

    #[test]
    fn test_overlap_policy_from_str() {
        assert_eq!(
            "symmetric".parse::<OverlapPolicy>().unwrap(),
            OverlapPolicy::Symmetric
        );
        assert_eq!(
            "Directional".parse::<OverlapPolicy>().unwrap(),
            OverlapPolicy::Directional
        );
        assert!("fuzzy".parse::<OverlapPolicy>().is_err());
    }

    #[test]
    fn test_overlap_policy_display_round_trips() {
        for policy in [OverlapPolicy::Directional, OverlapPolicy::Symmetric] {
            assert_eq!(policy.to_string().parse::<OverlapPolicy>().unwrap(), policy);
        }
    }
}

//! Month-span totals over merged skill intervals.

use skill_core::models::{ComputedSkill, SkillId, SkillInterval};

// ── DurationAggregator ────────────────────────────────────────────────────────

/// Stateless helper that turns merged interval lists into durations.
pub struct DurationAggregator;

impl DurationAggregator {
    /// Sum of the month-spans of `intervals`.
    ///
    /// The intervals are expected to be merged already; overlapping input is
    /// counted twice.
    pub fn total_months(intervals: &[SkillInterval]) -> i64 {
        intervals.iter().map(SkillInterval::month_span).sum()
    }

    /// Build the output record for one skill.
    pub fn computed_skill(
        id: SkillId,
        name: impl Into<String>,
        intervals: &[SkillInterval],
    ) -> ComputedSkill {
        ComputedSkill {
            id,
            name: name.into(),
            duration_in_months: Self::total_months(intervals),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

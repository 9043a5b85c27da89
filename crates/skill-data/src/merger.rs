//! Consolidation of overlapping intervals within one skill.
//!
//! Merging repeats until a fixpoint: every merge removes the two inputs,
//! appends their union and restarts the scan, because the new interval may
//! now overlap one that was already passed over. Each merge shortens the list
//! by one, so `n` intervals need at most `n - 1` merges.
//!
//! Under [`OverlapPolicy::Directional`] two intervals merge only when one
//! starts strictly inside the other. Intervals that merely touch
//! (`a.end == b.start`) stay separate, and an interval nested inside an
//! earlier one yields a union that ends at the nested interval's end.
//! [`OverlapPolicy::Symmetric`] merges any intersecting pair into its hull.

use skill_core::models::{OverlapPolicy, SkillInterval};
use skill_core::time_utils::format_month;
use tracing::debug;

// ── SkillMerger ───────────────────────────────────────────────────────────────

/// Merges the intervals of a single skill under a fixed [`OverlapPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillMerger {
    policy: OverlapPolicy,
}

impl SkillMerger {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Merge `intervals` until no pair overlaps under the configured policy.
    ///
    /// Lists of zero or one interval are returned unchanged.
    pub fn merge_overlapping(&self, mut intervals: Vec<SkillInterval>) -> Vec<SkillInterval> {
        while intervals.len() > 1 {
            let Some((prev, cur, merged)) = self.find_merge(&intervals) else {
                break;
            };

            debug!(
                "Merging {} intervals {}..{} and {}..{} into {}..{}",
                merged.skill_name,
                format_month(intervals[prev].start_date),
                format_month(intervals[prev].end_date),
                format_month(intervals[cur].start_date),
                format_month(intervals[cur].end_date),
                format_month(merged.start_date),
                format_month(merged.end_date),
            );

            // `cur > prev`, so removing `cur` first keeps `prev` valid.
            intervals.remove(cur);
            intervals.remove(prev);
            intervals.push(merged);
        }

        intervals
    }

    /// Combine `prev` (earlier in the list) with `cur` (later), or `None` when
    /// they do not overlap. The result carries `cur`'s id and name.
    pub fn merge_pair(&self, prev: &SkillInterval, cur: &SkillInterval) -> Option<SkillInterval> {
        let (start_date, end_date) = match self.policy {
            OverlapPolicy::Directional => directional_bounds(prev, cur)?,
            OverlapPolicy::Symmetric => symmetric_bounds(prev, cur)?,
        };

        Some(SkillInterval::new(
            cur.skill_id.clone(),
            cur.skill_name.clone(),
            start_date,
            end_date,
        ))
    }

    /// First `(prev, cur, merged)` found scanning every later `cur` against
    /// each `prev` in list order.
    fn find_merge(&self, intervals: &[SkillInterval]) -> Option<(usize, usize, SkillInterval)> {
        intervals.iter().enumerate().find_map(|(p, prev)| {
            intervals[p + 1..]
                .iter()
                .enumerate()
                .find_map(|(offset, cur)| {
                    self.merge_pair(prev, cur)
                        .map(|merged| (p, p + 1 + offset, merged))
                })
        })
    }
}

// ── Policy rules ──────────────────────────────────────────────────────────────

type Bounds = (chrono::NaiveDate, chrono::NaiveDate);

fn directional_bounds(prev: &SkillInterval, cur: &SkillInterval) -> Option<Bounds> {
    if cur.overlaps(prev) {
        Some((prev.start_date, cur.end_date))
    } else if prev.overlaps(cur) {
        Some((cur.start_date, prev.end_date))
    } else if cur.shares_start(prev) {
        // The strict test never fires for equal starts.
        Some((prev.start_date, prev.end_date.max(cur.end_date)))
    } else {
        None
    }
}

fn symmetric_bounds(prev: &SkillInterval, cur: &SkillInterval) -> Option<Bounds> {
    let intersects = prev.start_date < cur.end_date && cur.start_date < prev.end_date;
    if !intersects && !cur.shares_start(prev) {
        return None;
    }
    Some((
        prev.start_date.min(cur.start_date),
        prev.end_date.max(cur.end_date),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

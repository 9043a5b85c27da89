//! Explodes experiences into per-skill intervals.

use std::collections::HashMap;

use skill_core::models::{ExperienceRecord, SkillId, SkillInterval};

// ── SkillGroup ────────────────────────────────────────────────────────────────

/// Intervals grouped by skill id.
///
/// Skills iterate in first-encounter order and each skill's intervals keep
/// the order in which they were pushed.
#[derive(Debug, Clone, Default)]
pub struct SkillGroup {
    index: HashMap<SkillId, usize>,
    entries: Vec<(SkillId, Vec<SkillInterval>)>,
}

impl SkillGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `interval` to its skill's list, creating the list on first use.
    pub fn push(&mut self, interval: SkillInterval) {
        let slot = match self.index.get(&interval.skill_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(interval.skill_id.clone(), slot);
                self.entries.push((interval.skill_id.clone(), Vec::new()));
                slot
            }
        };
        self.entries[slot].1.push(interval);
    }

    /// Number of distinct skills.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of intervals across all skills.
    pub fn interval_count(&self) -> usize {
        self.iter().map(|(_, list)| list.len()).sum()
    }

    /// Skills in first-encounter order with their intervals.
    pub fn iter(&self) -> impl Iterator<Item = (&SkillId, &[SkillInterval])> {
        self.entries
            .iter()
            .map(|(id, list)| (id, list.as_slice()))
    }

    /// Consume the group, yielding `(skill id, intervals)` pairs in
    /// first-encounter order.
    pub fn into_entries(self) -> Vec<(SkillId, Vec<SkillInterval>)> {
        self.entries
    }
}

// ── ExperienceIngestor ────────────────────────────────────────────────────────

/// Stateless helper that turns experiences into a [`SkillGroup`].
pub struct ExperienceIngestor;

impl ExperienceIngestor {
    /// Build one interval per (experience, skill) pair and group them by
    /// skill id.
    pub fn ingest(experiences: &[ExperienceRecord]) -> SkillGroup {
        let mut group = SkillGroup::new();

        for experience in experiences {
            for skill in &experience.skills {
                group.push(SkillInterval::new(
                    skill.id.clone(),
                    skill.name.clone(),
                    experience.start_date,
                    experience.end_date,
                ));
            }
        }

        group
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

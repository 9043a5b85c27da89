//! Main skill-duration pipeline.
//!
//! Ingests experiences, merges each skill's intervals and sums their
//! month-spans, returning a [`SkillReport`] for the adapter layer.

use chrono::Utc;
use skill_core::models::{ComputedSkill, ExperienceRecord, OverlapPolicy};
use tracing::debug;

use crate::aggregator::DurationAggregator;
use crate::ingest::ExperienceIngestor;
use crate::merger::SkillMerger;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the computed skills.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Overlap rule used while merging.
    pub overlap_policy: OverlapPolicy,
    /// Number of experience records read.
    pub experiences_processed: usize,
    /// Number of distinct skills found.
    pub skills_found: usize,
    /// Intervals built by the ingestor (one per experience/skill pair).
    pub intervals_ingested: usize,
    /// Intervals left once every skill reached its merge fixpoint.
    pub intervals_after_merge: usize,
    /// Merges performed across all skills.
    pub merges_performed: usize,
}

/// The complete output of [`analyze_experiences`].
#[derive(Debug, Clone)]
pub struct SkillReport {
    /// One entry per distinct skill id, in first-encounter order.
    pub skills: Vec<ComputedSkill>,
    /// Metadata about this run.
    pub metadata: AnalysisMetadata,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Total non-overlapping months per skill using the default overlap policy.
///
/// Returns an empty list for an empty history.
pub fn compute_skills(experiences: &[ExperienceRecord]) -> Vec<ComputedSkill> {
    analyze_experiences(experiences, OverlapPolicy::default()).skills
}

/// Run the full pipeline.
///
/// 1. Group one interval per (experience, skill) pair by skill id.
/// 2. Merge every group holding more than one interval.
/// 3. Sum each group's month-spans; the skill name is the first one seen.
pub fn analyze_experiences(
    experiences: &[ExperienceRecord],
    policy: OverlapPolicy,
) -> SkillReport {
    let group = ExperienceIngestor::ingest(experiences);
    let skills_found = group.len();
    let intervals_ingested = group.interval_count();

    let merger = SkillMerger::new(policy);
    let mut intervals_after_merge = 0usize;

    let skills: Vec<ComputedSkill> = group
        .into_entries()
        .into_iter()
        .filter_map(|(id, intervals)| {
            let name = intervals.first()?.skill_name.clone();
            let merged = if intervals.len() > 1 {
                merger.merge_overlapping(intervals)
            } else {
                intervals
            };
            intervals_after_merge += merged.len();
            Some(DurationAggregator::computed_skill(id, name, &merged))
        })
        .collect();

    let metadata = AnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        overlap_policy: merger.policy(),
        experiences_processed: experiences.len(),
        skills_found,
        intervals_ingested,
        intervals_after_merge,
        merges_performed: intervals_ingested - intervals_after_merge,
    };

    debug!(
        "Computed {} skills from {} experiences ({} intervals, {} merges, {} policy)",
        metadata.skills_found,
        metadata.experiences_processed,
        metadata.intervals_ingested,
        metadata.merges_performed,
        policy,
    );

    SkillReport { skills, metadata }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

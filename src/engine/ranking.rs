use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{JobId, MatchResult, ProfileId};

/// Score at or above which a match reads as excellent.
pub const EXCELLENT_BAND: f64 = 80.0;
/// Score at or above which a match reads as good.
pub const GOOD_BAND: f64 = 60.0;
/// Score at or above which a match reads as fair.
pub const FAIR_BAND: f64 = 40.0;

/// Rank match results for presentation.
///
/// Duplicate (subject, target) pairs collapse to the freshest computation
/// before ordering. The final order is total: score descending, then
/// computation time ascending, then subject and target identifiers.
/// Ranking the same input twice yields byte-identical output.
pub fn rank(results: &[MatchResult], limit: Option<usize>) -> Vec<MatchResult> {
    // 1. Dedup Phase
    let mut latest: BTreeMap<(ProfileId, JobId), MatchResult> = BTreeMap::new();
    for result in results {
        let key = (result.subject.clone(), result.target.clone());
        match latest.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(result.clone());
            }
            Entry::Occupied(mut slot) => {
                if supersedes(result, slot.get()) {
                    slot.insert(result.clone());
                }
            }
        }
    }

    // 2. Ordering Phase
    let mut ranked: Vec<MatchResult> = latest.into_values().collect();
    ranked.sort_by(compare);

    debug_assert!(
        ranked
            .windows(2)
            .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater),
        "ranked output must be totally ordered"
    );

    // 3. Truncation Phase
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    ranked
}

/// Ranked results at or above the floor, an absolute score on the 0-100
/// scale.
pub fn shortlist(results: &[MatchResult], floor: f64, limit: Option<usize>) -> Vec<MatchResult> {
    let mut kept = rank(results, None);
    kept.retain(|result| result.score >= floor);

    if let Some(limit) = limit {
        kept.truncate(limit);
    }

    kept
}

/// Distribution of scores across presentation bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBands {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

/// Aggregate view of a scored batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub average_score: f64,
    pub highest_score: f64,
    pub above_floor: usize,
    pub bands: ScoreBands,
}

/// Summarize a scored batch. Duplicates collapse exactly as in [`rank`],
/// so the counts describe the deduplicated set.
pub fn summarize(results: &[MatchResult], floor: f64) -> MatchSummary {
    let ranked = rank(results, None);

    let total = ranked.len();
    let mut bands = ScoreBands {
        excellent: 0,
        good: 0,
        fair: 0,
        poor: 0,
    };
    let mut sum = 0.0;
    let mut above_floor = 0;

    for result in &ranked {
        sum += result.score;
        if result.score >= floor {
            above_floor += 1;
        }

        if result.score >= EXCELLENT_BAND {
            bands.excellent += 1;
        } else if result.score >= GOOD_BAND {
            bands.good += 1;
        } else if result.score >= FAIR_BAND {
            bands.fair += 1;
        } else {
            bands.poor += 1;
        }
    }

    let average_score = if total == 0 { 0.0 } else { sum / total as f64 };
    let highest_score = ranked.first().map(|result| result.score).unwrap_or(0.0);

    MatchSummary {
        total,
        average_score,
        highest_score,
        above_floor,
        bands,
    }
}

/// Later computation wins; at the same instant the higher score wins, and
/// the first occurrence wins outright ties.
fn supersedes(candidate: &MatchResult, kept: &MatchResult) -> bool {
    match candidate.computed_at.cmp(&kept.computed_at) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => candidate.score > kept.score,
    }
}

fn compare(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.computed_at.cmp(&b.computed_at))
        .then_with(|| a.subject.cmp(&b.subject))
        .then_with(|| a.target.cmp(&b.target))
}

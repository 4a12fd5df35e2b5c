use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{JobId, ProfileId};
use crate::types::skills::SkillSet;

/// One factor's raw sub-score in [0,1], its weight, and the weighted
/// contribution to the final 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub raw: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Explanation for why a match scored what it did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: FactorScore,
    pub academic: FactorScore,
    pub branch: FactorScore,
    pub experience: FactorScore,
    pub certifications: FactorScore,
}

impl ScoreBreakdown {
    /// Re-derive the final score from the recorded contributions.
    pub fn total(&self) -> f64 {
        let sum = self.skills.contribution
            + self.academic.contribution
            + self.branch.contribution
            + self.experience.contribution
            + self.certifications.contribution;

        sum.clamp(0.0, 100.0)
    }
}

/// The outcome of scoring one candidate against one opening.
/// Immutable once computed; a profile or job edit produces a new
/// MatchResult rather than mutating the old one.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct MatchResult {
    pub subject: ProfileId,
    pub target: JobId,

    pub score: f64,
    pub breakdown: ScoreBreakdown,

    pub computed_at: DateTime<Utc>,
}

/// A career direction suggested from a candidate's extracted features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub domain: String,
    pub confidence: f64,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
    pub rationale: String,
}

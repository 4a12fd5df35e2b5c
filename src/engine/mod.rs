pub mod ranking;
pub mod weights;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::{JobRequirement, ProfileFeatures};
use crate::similarity::cosine;
use crate::types::report::{FactorScore, MatchResult, ScoreBreakdown};
pub use ranking::{rank, shortlist, summarize, MatchSummary, ScoreBands};
pub use weights::{MatchWeights, DEFAULT_WEIGHTS};

/// Width of the linear CGPA ramp below a posting's minimum.
pub const DEFAULT_CGPA_RAMP: f64 = 2.0;

/// Score floor below which a match is not worth surfacing to recruiters.
pub const DEFAULT_SHORTLIST_FLOOR: f64 = 30.0;

/// Raw per-factor sub-scores in [0,1], before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    pub skills: f64,
    pub academic: f64,
    pub branch: f64,
    pub experience: f64,
    pub certifications: f64,
}

impl FactorScores {
    fn within_unit(&self) -> bool {
        [
            self.skills,
            self.academic,
            self.branch,
            self.experience,
            self.certifications,
        ]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    }
}

/// Pluggable factor evaluation. The rule-based provider below is the
/// default; an external-service-backed provider would implement the same
/// trait and be selected by configuration, never by feature-detection
/// inside the scoring logic.
pub trait ScoreProvider {
    fn evaluate(&self, profile: &ProfileFeatures, job: &JobRequirement) -> FactorScores;

    /// Evaluate with debug-mode range enforcement.
    fn evaluate_checked(&self, profile: &ProfileFeatures, job: &JobRequirement) -> FactorScores {
        let scores = self.evaluate(profile, job);
        debug_assert!(
            scores.within_unit(),
            "factor scores out of range [0.0, 1.0]: {scores:?}"
        );
        scores
    }
}

/// Deterministic rule evaluation of the five factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleScoreProvider {
    /// Width of the linear CGPA ramp below a posting's minimum.
    pub cgpa_ramp: f64,
}

impl Default for RuleScoreProvider {
    fn default() -> Self {
        RuleScoreProvider {
            cgpa_ramp: DEFAULT_CGPA_RAMP,
        }
    }
}

impl ScoreProvider for RuleScoreProvider {
    fn evaluate(&self, profile: &ProfileFeatures, job: &JobRequirement) -> FactorScores {
        FactorScores {
            skills: skills_overlap(profile, job),
            academic: academic_fit(profile.cgpa, job.min_cgpa, self.cgpa_ramp),
            branch: branch_alignment(profile, job),
            experience: experience_fit(profile.experience_years, job.min_experience_years),
            certifications: certification_coverage(profile, job),
        }
    }
}

/// Cosine overlap over the union of the posting's required and preferred
/// skills. Required entries weigh 1.0 and preferred-only entries 0.5 on
/// both sides, with terms the candidate lacks at 0.0, so the overlap is
/// the root of the matched share of the posting's weight mass: widening
/// the required set with a held skill never lowers it, and full coverage
/// scores exactly 1.0. A posting with no skill requirements at all is
/// trivially satisfied.
fn skills_overlap(profile: &ProfileFeatures, job: &JobRequirement) -> f64 {
    if job.has_no_skill_requirements() {
        return 1.0;
    }

    let union = job.required_skills.union(&job.preferred_skills);

    let mut job_side = Vec::with_capacity(union.len());
    let mut profile_side = Vec::with_capacity(union.len());
    for term in union.iter() {
        let weight = if job.required_skills.contains(term) {
            1.0
        } else {
            0.5
        };
        job_side.push(weight);
        profile_side.push(if profile.skills.contains(term) { weight } else { 0.0 });
    }

    cosine(&job_side, &profile_side)
}

/// 1.0 at or above the posting's minimum, then a linear ramp down to 0.0
/// at `min_cgpa - ramp`. The explicitly permitted floor clamp.
fn academic_fit(cgpa: f64, min_cgpa: f64, ramp: f64) -> f64 {
    if cgpa >= min_cgpa {
        1.0
    } else {
        ((cgpa - (min_cgpa - ramp)) / ramp).clamp(0.0, 1.0)
    }
}

/// Empty preference list accepts any branch.
fn branch_alignment(profile: &ProfileFeatures, job: &JobRequirement) -> f64 {
    if job.branch_preferences.is_empty() || job.branch_preferences.contains(&profile.branch) {
        1.0
    } else {
        0.0
    }
}

/// 1.0 at or above the posting's minimum, else a linear ramp from 0.0 at
/// zero years up to the requirement.
fn experience_fit(years: u32, min_years: u32) -> f64 {
    if years >= min_years {
        1.0
    } else {
        f64::from(years) / f64::from(min_years)
    }
}

/// Fraction of the posting's preferred skills covered by certifications.
/// No preferred skills means nothing to cover: trivially satisfied, the
/// same rule the skills factor applies to an empty posting.
fn certification_coverage(profile: &ProfileFeatures, job: &JobRequirement) -> f64 {
    if job.preferred_skills.is_empty() {
        return 1.0;
    }

    let covered = job
        .preferred_skills
        .intersection(&profile.certifications)
        .len();

    covered as f64 / job.preferred_skills.len() as f64
}

/// Engine-level tuning: factor weights plus the shortlist floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub weights: MatchWeights,
    pub shortlist_floor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            weights: MatchWeights::default(),
            shortlist_floor: DEFAULT_SHORTLIST_FLOOR,
        }
    }
}

pub struct MatchEngine<P> {
    provider: P,
    config: EngineConfig,
}

impl Default for MatchEngine<RuleScoreProvider> {
    fn default() -> Self {
        Self {
            provider: RuleScoreProvider::default(),
            config: EngineConfig::default(),
        }
    }
}

impl<P> MatchEngine<P>
where
    P: ScoreProvider,
{
    pub fn new(provider: P, config: EngineConfig) -> Self {
        debug_assert!(
            (config.weights.sum() - 1.0).abs() < 1e-6,
            "factor weights must sum to 1.0, got {}",
            config.weights.sum()
        );

        Self { provider, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one candidate against one posting, stamped with the current
    /// time.
    pub fn score(&self, profile: &ProfileFeatures, job: &JobRequirement) -> MatchResult {
        self.score_at(profile, job, Utc::now())
    }

    /// Score with an explicit timestamp, for reproducible pipelines.
    /// Scoring assumes validated inputs; both value objects enforce their
    /// invariants at construction.
    pub fn score_at(
        &self,
        profile: &ProfileFeatures,
        job: &JobRequirement,
        computed_at: DateTime<Utc>,
    ) -> MatchResult {
        // 1. Factor Phase
        let factors = self.provider.evaluate_checked(profile, job);

        // 2. Weighting Phase
        let weights = self.config.weights;
        let breakdown = ScoreBreakdown {
            skills: factor(factors.skills, weights.skills),
            academic: factor(factors.academic, weights.academic),
            branch: factor(factors.branch, weights.branch),
            experience: factor(factors.experience, weights.experience),
            certifications: factor(factors.certifications, weights.certifications),
        };

        // 3. Clamping Phase
        let score = breakdown.total();

        MatchResult {
            subject: profile.id.clone(),
            target: job.id.clone(),
            score,
            breakdown,
            computed_at,
        }
    }

    /// Score many candidates against one posting. A single timestamp for
    /// the whole batch keeps the output reproducible.
    pub fn score_candidates(
        &self,
        profiles: &[ProfileFeatures],
        job: &JobRequirement,
        computed_at: DateTime<Utc>,
    ) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = profiles
            .iter()
            .map(|profile| self.score_at(profile, job, computed_at))
            .collect();

        tracing::debug!(
            candidates = results.len(),
            job = job.id.as_str(),
            "scored candidate batch"
        );

        results
    }

    /// Score one candidate against many postings.
    pub fn score_openings(
        &self,
        profile: &ProfileFeatures,
        jobs: &[JobRequirement],
        computed_at: DateTime<Utc>,
    ) -> Vec<MatchResult> {
        let results: Vec<MatchResult> = jobs
            .iter()
            .map(|job| self.score_at(profile, job, computed_at))
            .collect();

        tracing::debug!(
            openings = results.len(),
            profile = profile.id.as_str(),
            "scored opening batch"
        );

        results
    }
}

fn factor(raw: f64, weight: f64) -> FactorScore {
    FactorScore {
        raw,
        weight,
        contribution: raw * weight * 100.0,
    }
}

use serde::{Deserialize, Serialize};

use crate::profile::ProfileFeatures;

/// Default component weights for the readiness score.
pub const DEFAULT_READINESS_WEIGHTS: ReadinessWeights = ReadinessWeights {
    academic: 0.35,
    skills: 0.30,
    experience: 0.20,
    certifications: 0.15,
};

/// Component weights for the overall readiness score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    pub academic: f64,
    pub skills: f64,
    pub experience: f64,
    pub certifications: f64,
}

impl ReadinessWeights {
    pub fn sum(&self) -> f64 {
        self.academic + self.skills + self.experience + self.certifications
    }
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        DEFAULT_READINESS_WEIGHTS
    }
}

/// Coarse placement-readiness tier derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
    Beginner,
}

impl ReadinessLevel {
    /// Excellent >= 85, Good >= 70, Average >= 55, NeedsImprovement >= 40,
    /// Beginner below that.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            ReadinessLevel::Excellent
        } else if score >= 70.0 {
            ReadinessLevel::Good
        } else if score >= 55.0 {
            ReadinessLevel::Average
        } else if score >= 40.0 {
            ReadinessLevel::NeedsImprovement
        } else {
            ReadinessLevel::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessLevel::Excellent => "Excellent",
            ReadinessLevel::Good => "Good",
            ReadinessLevel::Average => "Average",
            ReadinessLevel::NeedsImprovement => "Needs Improvement",
            ReadinessLevel::Beginner => "Beginner",
        }
    }
}

/// Banded component scores on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessBreakdown {
    pub academic: f64,
    pub skills: f64,
    pub experience: f64,
    pub certifications: f64,
}

/// Overall readiness assessment for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub overall: f64,
    pub level: ReadinessLevel,
    pub breakdown: ReadinessBreakdown,
}

/// Assess placement readiness with the default weights.
pub fn assess(features: &ProfileFeatures) -> ReadinessReport {
    assess_with(features, ReadinessWeights::default())
}

/// Assess placement readiness with explicit component weights.
///
/// Each component is banded onto the 0-100 scale and the overall score is
/// their weighted combination. Deterministic for identical features.
pub fn assess_with(features: &ProfileFeatures, weights: ReadinessWeights) -> ReadinessReport {
    let breakdown = ReadinessBreakdown {
        academic: academic_band(features.cgpa),
        skills: skills_band(features.skills.len()),
        experience: experience_band(features.experience_years),
        certifications: certification_band(features.certifications.len()),
    };

    let overall = (breakdown.academic * weights.academic
        + breakdown.skills * weights.skills
        + breakdown.experience * weights.experience
        + breakdown.certifications * weights.certifications)
        .clamp(0.0, 100.0);

    ReadinessReport {
        overall,
        level: ReadinessLevel::from_score(overall),
        breakdown,
    }
}

fn academic_band(cgpa: f64) -> f64 {
    if cgpa >= 9.0 {
        100.0
    } else if cgpa >= 8.0 {
        85.0
    } else if cgpa >= 7.0 {
        70.0
    } else if cgpa >= 6.0 {
        55.0
    } else {
        40.0
    }
}

fn skills_band(count: usize) -> f64 {
    if count >= 8 {
        100.0
    } else if count >= 5 {
        75.0
    } else if count >= 3 {
        50.0
    } else if count >= 1 {
        25.0
    } else {
        0.0
    }
}

fn experience_band(years: u32) -> f64 {
    if years >= 2 {
        100.0
    } else if years == 1 {
        80.0
    } else {
        30.0
    }
}

fn certification_band(count: usize) -> f64 {
    (count as f64 * 25.0).min(100.0)
}

use serde::{Deserialize, Serialize};

/// Relative importance of each match factor. Values are fractions of the
/// final 0-100 score and must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    /// Cosine overlap between the candidate's skills and the posting's
    /// required/preferred skills. The dominant factor.
    pub skills: f64,
    /// CGPA measured against the posting's minimum.
    pub academic: f64,
    /// Academic branch against the posting's preference list.
    pub branch: f64,
    /// Years of experience against the posting's minimum.
    pub experience: f64,
    /// Certifications covering the posting's preferred skills.
    pub certifications: f64,
}

/// The platform's launch tuning. Empirical rather than fitted to data;
/// deployments may override any of it.
pub const DEFAULT_WEIGHTS: MatchWeights = MatchWeights {
    skills: 0.40,
    academic: 0.20,
    branch: 0.15,
    experience: 0.15,
    certifications: 0.10,
};

impl MatchWeights {
    /// Sum of all factor weights. Expected to be 1.0; the engine asserts
    /// this in debug builds.
    pub fn sum(&self) -> f64 {
        self.skills + self.academic + self.branch + self.experience + self.certifications
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

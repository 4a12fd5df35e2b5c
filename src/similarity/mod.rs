use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::extract::vocabulary::SkillVocabulary;
use crate::types::identifiers::RecordVersion;
use crate::types::skills::SkillSet;

/// Comparing vectors built from different vocabulary versions is a
/// precondition violation. It is checked here, at the vectorizer boundary,
/// and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Vectors built from different vocabulary versions: {left} vs {right}")]
pub struct VocabularyMismatch {
    pub left: String,
    pub right: String,
}

/// A skill-presence vector pinned to the vocabulary build that defined its
/// layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillVector {
    values: Vec<f64>,
    vocabulary: RecordVersion,
}

/// One-hot vectorization over the vocabulary's term order: 1.0 where the
/// skill set holds the term, 0.0 elsewhere. Same skills + same vocabulary
/// always yields an identical vector.
pub fn vectorize(skills: &SkillSet, vocabulary: &SkillVocabulary) -> SkillVector {
    let values = vocabulary
        .terms()
        .map(|term| if skills.contains(term) { 1.0 } else { 0.0 })
        .collect();

    SkillVector {
        values,
        vocabulary: vocabulary.version().clone(),
    }
}

impl SkillVector {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn vocabulary_version(&self) -> &RecordVersion {
        &self.vocabulary
    }

    /// Cosine similarity against another vector from the same vocabulary
    /// build.
    pub fn similarity(&self, other: &SkillVector) -> Result<f64, VocabularyMismatch> {
        if self.vocabulary != other.vocabulary {
            return Err(VocabularyMismatch {
                left: self.vocabulary.as_str().to_string(),
                right: other.vocabulary.as_str().to_string(),
            });
        }

        Ok(cosine(&self.values, &other.values))
    }
}

/// Cosine similarity in [0,1] for non-negative vectors.
///
/// Defined as 0.0 when either vector is all-zero instead of dividing by
/// zero, and 0.0 on dimension mismatch. Symmetric in its arguments. The
/// denominator is sqrt(|a|^2 * |b|^2) in a single rounding step, so
/// self-similarity of one-hot vectors is exactly 1.0.
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        warn!(
            left = a.len(),
            right = b.len(),
            "cosine over mismatched dimensions"
        );
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b).sqrt()).clamp(0.0, 1.0)
}

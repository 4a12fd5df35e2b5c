use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of normalized skill tokens.
/// Normalization rules:
/// - Lowercase
/// - Surrounding whitespace trimmed, inner whitespace collapsed to one space
/// - Empty tokens dropped
///
/// Stored sorted so iteration and serialization are deterministic.
/// Synonym collapsing is the vocabulary's job, not this type's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    inner: BTreeSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        SkillSet {
            inner: BTreeSet::new(),
        }
    }

    /// Build a set from raw tokens, applying the normalization rules.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let inner = tokens
            .into_iter()
            .filter_map(|t| {
                let norm = normalize_token(t.as_ref());
                if norm.is_empty() {
                    None
                } else {
                    Some(norm)
                }
            })
            .collect();

        SkillSet { inner }
    }

    /// Membership test on an already-normalized or raw token.
    pub fn contains(&self, token: &str) -> bool {
        self.inner.contains(&normalize_token(token))
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            inner: self.inner.intersection(&other.inner).cloned().collect(),
        }
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            inner: self.inner.difference(&other.inner).cloned().collect(),
        }
    }

    pub fn union(&self, other: &SkillSet) -> SkillSet {
        SkillSet {
            inner: self.inner.union(&other.inner).cloned().collect(),
        }
    }

    /// Tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }

    /// Sorted, comma-joined rendering for rationale strings and logs.
    pub fn to_joined(&self) -> String {
        self.inner
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        SkillSet::from_tokens(iter)
    }
}

pub(crate) fn normalize_token(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub mod vocabulary;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::skills::SkillSet;
pub use vocabulary::SkillVocabulary;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").unwrap());

/// Keyword before the value: "cgpa: 8.5", "gpa 8.5", "cgpa of 8.5".
static CGPA_AFTER_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:cgpa|gpa)\s*(?:[:\-]|of|is)?\s*(\d+(?:\.\d+)?)").unwrap());

/// Value before the keyword: "8.5 cgpa".
static CGPA_BEFORE_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:cgpa|gpa)\b").unwrap());

/// Grade out of ten with no keyword nearby: "8.5/10".
static CGPA_OUT_OF_TEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*/\s*10(?:\.0)?\b").unwrap());

static EXPERIENCE_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)(?:\.\d+)?\s*\+?\s*(?:years?|yrs?)\b").unwrap());

/// Phone forms seen on the platform, most common first: bare 10 digits,
/// 3-3-4 grouping, 5-5 grouping, +91 prefixed.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b\d{10}\b").unwrap(),
        Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap(),
        Regex::new(r"\b\d{5}[-.\s]?\d{5}\b").unwrap(),
        Regex::new(r"\+91[-.\s]?\d{10}\b").unwrap(),
    ]
});

/// Fields the extractor looked for but could not locate. Not errors: the
/// caller prompts the candidate for manual entry instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnextractedField {
    Skills,
    Cgpa,
    ExperienceYears,
    Email,
    Phone,
}

/// Evidence pulled out of free text. A ProfileFeatures-partial: every
/// scalar is optional and the skill set may be empty; `unextracted` lists
/// what was looked for and not found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub skills: SkillSet,
    pub cgpa: Option<f64>,
    pub experience_years: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub unextracted: Vec<UnextractedField>,
}

/// Extract skills and scalar fields from résumé or posting text.
///
/// Never fails: empty or unparseable text produces an empty skill set and
/// a full `unextracted` list. Calling twice on identical input yields an
/// identical result.
pub fn extract(text: &str, vocabulary: &SkillVocabulary) -> ExtractedProfile {
    let normalized = normalize_text(text);

    let skills = match_vocabulary(&normalized, vocabulary);
    let cgpa = find_cgpa(&normalized);
    let experience_years = find_experience_years(&normalized);
    let email = find_email(&normalized);
    let phone = find_phone(&normalized);

    let mut unextracted = Vec::new();
    if skills.is_empty() {
        unextracted.push(UnextractedField::Skills);
    }
    if cgpa.is_none() {
        unextracted.push(UnextractedField::Cgpa);
    }
    if experience_years.is_none() {
        unextracted.push(UnextractedField::ExperienceYears);
    }
    if email.is_none() {
        unextracted.push(UnextractedField::Email);
    }
    if phone.is_none() {
        unextracted.push(UnextractedField::Phone);
    }

    if !unextracted.is_empty() {
        tracing::debug!(gaps = ?unextracted, "free-text extraction left gaps");
    }

    ExtractedProfile {
        skills,
        cgpa,
        experience_years,
        email,
        phone,
        unextracted,
    }
}

/// Lowercase and collapse all whitespace runs (including newlines) to one
/// space, so multi-word phrases match across line breaks.
fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scan the vocabulary terms, and the alias table, against the text.
/// Matches collapse to the vocabulary's canonical terms.
fn match_vocabulary(normalized: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    let mut matched = Vec::new();

    for term in vocabulary.terms() {
        if contains_term(normalized, term) {
            matched.push(term.to_string());
        }
    }
    for (alias, term) in vocabulary.aliases() {
        if contains_term(normalized, alias) {
            matched.push(term.to_string());
        }
    }

    SkillSet::from_tokens(matched)
}

/// Word-boundary-guarded containment: the match must not continue an
/// alphanumeric run on either side, so "c" never matches inside
/// "cumulative" and "r" never inside "résumé", while "c++" still matches
/// before a space.
fn contains_term(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    let mut start = 0;

    while let Some(found) = text[start..].find(term) {
        let at = start + found;
        let end = at + term.len();

        let left_ok = text[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let right_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if left_ok && right_ok {
            return true;
        }

        // Step over the first matched char; a one-byte step can land
        // inside a multi-byte char.
        start = at + text[at..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

/// CGPA rules in priority order: keyword-first, value-first, out-of-ten.
/// The first hit wins; the value is clamped to the 0-10 grading scale.
fn find_cgpa(normalized: &str) -> Option<f64> {
    let patterns = [&CGPA_AFTER_KEYWORD, &CGPA_BEFORE_KEYWORD, &CGPA_OUT_OF_TEN];

    patterns
        .iter()
        .find_map(|pattern| {
            pattern
                .captures(normalized)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok())
        })
        .map(|value| value.clamp(0.0, 10.0))
}

fn find_experience_years(normalized: &str) -> Option<u32> {
    EXPERIENCE_YEARS
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

fn find_email(normalized: &str) -> Option<String> {
    EMAIL.find(normalized).map(|m| m.as_str().to_string())
}

fn find_phone(normalized: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(normalized))
        .map(|m| m.as_str().to_string())
}

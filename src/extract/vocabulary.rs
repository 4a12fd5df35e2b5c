use std::collections::{BTreeMap, HashMap};

use strsim::damerau_levenshtein;

use crate::types::identifiers::RecordVersion;
use crate::types::skills::{normalize_token, SkillSet};

/// Recognized technical and soft skills, in vector-layout order.
/// Position in this list is the dimension a skill occupies in every vector
/// built from the builtin vocabulary.
const BUILTIN_TERMS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c", "c++", "c#", "php", "ruby", "go",
    "rust", "swift", "kotlin", "r", "matlab", "scala", "perl",
    // Web and frameworks
    "html", "css", "django", "flask", "react", "angular", "vue", "spring", "express",
    "laravel", "ruby on rails", "bootstrap", "jquery", "node.js", "react native", "flutter",
    "web development",
    // Data and machine learning
    "sql", "machine learning", "deep learning", "data analysis", "statistics",
    "data structures", "algorithms", "tensorflow", "pytorch", "keras", "pandas", "numpy",
    "data visualization",
    // Databases
    "mysql", "postgresql", "mongodb", "sqlite", "oracle", "redis", "cassandra", "dynamodb",
    "firebase",
    // Tools and platforms
    "git", "docker", "kubernetes", "jenkins", "aws", "azure", "gcp", "linux", "unix",
    "jira", "confluence", "figma", "photoshop", "excel",
    // Core engineering
    "embedded systems", "digital electronics", "circuit analysis", "power systems",
    "control systems", "simulink", "vlsi", "pcb design", "autocad", "solidworks",
    "thermodynamics", "manufacturing", "fea", "staad pro", "surveying",
    "construction management", "structural design",
    // Soft skills
    "communication", "leadership", "teamwork", "problem solving", "critical thinking",
    "time management", "adaptability", "creativity", "attention to detail", "collaboration",
    "analytical skills", "presentation", "negotiation", "project management",
    "business analysis", "financial analysis", "marketing", "recruitment",
];

/// Variant spellings seen in résumés and postings, mapped to their
/// vocabulary term.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("es6", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("python3", "python"),
    ("golang", "go"),
    ("c sharp", "c#"),
    ("cpp", "c++"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("node js", "node.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vuejs", "vue"),
    ("angularjs", "angular"),
    ("rn", "react native"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("k8s", "kubernetes"),
    ("ml", "machine learning"),
    ("ai", "machine learning"),
    ("artificial intelligence", "machine learning"),
    ("dl", "deep learning"),
    ("tf", "tensorflow"),
    ("amazon web services", "aws"),
    ("google cloud platform", "gcp"),
    ("ms azure", "azure"),
    ("drf", "django"),
    ("problem-solving", "problem solving"),
    ("team work", "teamwork"),
];

/// Ordered controlled vocabulary of recognized skill terms.
///
/// Term order is the vector layout: every vector built from this vocabulary
/// puts its i-th component on the i-th term. The fingerprint pins that
/// layout, so vectors from different vocabulary builds can never be
/// compared silently.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
    positions: HashMap<String, usize>,
    aliases: BTreeMap<String, String>,
    version: RecordVersion,
}

impl SkillVocabulary {
    /// Build a vocabulary from ordered terms (duplicates dropped, first
    /// occurrence wins) and an alias table of variant spellings.
    pub fn new<I, S>(terms: I, aliases: &[(&str, &str)]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut positions = HashMap::new();

        for raw in terms {
            let term = normalize_token(raw.as_ref());
            if term.is_empty() || positions.contains_key(&term) {
                continue;
            }
            positions.insert(term.clone(), ordered.len());
            ordered.push(term);
        }

        let aliases: BTreeMap<String, String> = aliases
            .iter()
            .map(|(alias, term)| (normalize_token(alias), normalize_token(term)))
            .filter(|(alias, term)| !alias.is_empty() && !term.is_empty())
            .collect();

        let version = fingerprint(&ordered, &aliases);

        SkillVocabulary {
            terms: ordered,
            positions,
            aliases,
            version,
        }
    }

    /// The platform's shipped vocabulary and alias table.
    pub fn builtin() -> Self {
        SkillVocabulary::new(BUILTIN_TERMS.iter().copied(), BUILTIN_ALIASES)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Fingerprint of the term order and alias table.
    pub fn version(&self) -> &RecordVersion {
        &self.version
    }

    /// Terms in vector-layout order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Alias table entries as (alias, term), in sorted order.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str()))
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.positions.contains_key(&self.canonicalize(raw))
    }

    /// Vector dimension of a term, if the vocabulary knows it.
    pub fn position(&self, raw: &str) -> Option<usize> {
        self.positions.get(&self.canonicalize(raw)).copied()
    }

    /// Map one raw token to its canonical form: exact member, then alias,
    /// then guarded fuzzy fallback. Unknown tokens normalize to themselves
    /// rather than being dropped; they simply never occupy a vector
    /// dimension.
    pub fn canonicalize(&self, raw: &str) -> String {
        let norm = normalize_token(raw);
        if norm.is_empty() || self.positions.contains_key(&norm) {
            return norm;
        }

        if let Some(term) = self.aliases.get(&norm) {
            return term.clone();
        }

        if let Some(term) = self.fuzzy_term(&norm) {
            return term.to_string();
        }

        norm
    }

    /// Collapse raw declared tokens (form fields, parsed lists) into a
    /// normalized SkillSet.
    pub fn normalize<I, S>(&self, raw: I) -> SkillSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|token| self.canonicalize(token.as_ref()))
            .collect()
    }

    /// Typo-tolerant fallback over vocabulary terms. Short names like
    /// "go", "c" and "r" are reachable only by exact or alias lookup:
    /// fuzzy applies from 5 chars at distance 1, and from 8 chars at
    /// distance 2. Scanning the ordered term list keeps tie resolution
    /// deterministic.
    fn fuzzy_term(&self, token: &str) -> Option<&str> {
        if token.len() < 5 {
            return None;
        }

        let mut best: Option<(&str, usize)> = None;
        for term in &self.terms {
            if term.len() < 5 {
                continue;
            }

            let distance = damerau_levenshtein(token, term);
            let len = token.len().max(term.len());
            let acceptable = distance == 1 || (len >= 8 && distance == 2);
            if !acceptable {
                continue;
            }

            match best {
                None => best = Some((term, distance)),
                Some((_, best_distance)) if distance < best_distance => {
                    best = Some((term, distance))
                }
                _ => {}
            }
        }

        best.map(|(term, _)| term)
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        SkillVocabulary::builtin()
    }
}

fn fingerprint(terms: &[String], aliases: &BTreeMap<String, String>) -> RecordVersion {
    let alias_lines = aliases
        .iter()
        .map(|(alias, term)| format!("{alias}>{term}"))
        .collect::<Vec<_>>()
        .join(";");

    let canonical = format!(
        "vocabulary\nterms:{}\naliases:{}\n",
        terms.join(","),
        alias_lines,
    );

    RecordVersion::from_content(canonical.as_bytes())
}

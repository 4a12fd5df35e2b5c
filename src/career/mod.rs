pub mod readiness;

use serde::{Deserialize, Serialize};

use crate::profile::{Branch, ProfileFeatures};
use crate::types::{CareerRecommendation, SkillSet};
pub use readiness::{assess, ReadinessLevel, ReadinessReport};

/// Confidence below which a domain is not worth recommending.
pub const DEFAULT_CONFIDENCE_CUTOFF: f64 = 0.15;

/// Confidence adjustment when the profile's branch matches a rule's
/// affinity.
pub const DEFAULT_AFFINITY_BONUS: f64 = 0.10;

/// One career domain and the skill profile that signals it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRule {
    pub domain: String,
    pub required_skills: SkillSet,
    pub branch_affinity: Option<Branch>,
    pub base_confidence: f64,
}

/// Ordered set of domain rules plus mapper tuning. Loaded once, never
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<DomainRule>,
    confidence_cutoff: f64,
    affinity_bonus: f64,
}

impl RuleTable {
    pub fn new(rules: Vec<DomainRule>, confidence_cutoff: f64, affinity_bonus: f64) -> Self {
        RuleTable {
            rules,
            confidence_cutoff,
            affinity_bonus,
        }
    }

    /// The thirteen career domains the platform ships with.
    pub fn builtin() -> Self {
        let rules = vec![
            rule(
                "Software Developer",
                &["programming", "python", "java", "javascript", "software development"],
                Some(Branch::Cse),
                1.0,
            ),
            rule(
                "Data Scientist",
                &["python", "statistics", "machine learning", "data analysis"],
                Some(Branch::Cse),
                0.9,
            ),
            rule(
                "Web Developer",
                &["html", "css", "javascript", "web development"],
                Some(Branch::Cse),
                0.9,
            ),
            rule(
                "Mobile App Developer",
                &["mobile development", "android", "ios", "java", "swift"],
                None,
                0.8,
            ),
            rule(
                "Mechanical Engineer",
                &["mechanical engineering", "cad", "design", "manufacturing"],
                Some(Branch::Mech),
                0.9,
            ),
            rule(
                "Civil Engineer",
                &["civil engineering", "construction", "structural design"],
                Some(Branch::Civil),
                0.9,
            ),
            rule(
                "Electrical Engineer",
                &["electrical engineering", "circuits", "electronics"],
                Some(Branch::Eee),
                0.9,
            ),
            rule(
                "Embedded Systems Engineer",
                &["embedded systems", "c", "digital electronics", "circuit analysis"],
                Some(Branch::Ece),
                0.9,
            ),
            rule(
                "Business Analyst",
                &["business analysis", "requirements gathering", "process improvement"],
                None,
                0.8,
            ),
            rule(
                "Product Manager",
                &["product management", "strategy", "market research"],
                None,
                0.7,
            ),
            rule(
                "Marketing Specialist",
                &["marketing", "digital marketing", "content creation"],
                None,
                0.8,
            ),
            rule(
                "Financial Analyst",
                &["financial analysis", "excel", "accounting", "finance"],
                None,
                0.8,
            ),
            rule(
                "Operations Manager",
                &["operations management", "process optimization", "logistics"],
                None,
                0.7,
            ),
        ];

        RuleTable::new(rules, DEFAULT_CONFIDENCE_CUTOFF, DEFAULT_AFFINITY_BONUS)
    }

    pub fn rules(&self) -> &[DomainRule] {
        &self.rules
    }

    pub fn confidence_cutoff(&self) -> f64 {
        self.confidence_cutoff
    }

    pub fn affinity_bonus(&self) -> f64 {
        self.affinity_bonus
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::builtin()
    }
}

fn rule(domain: &str, required: &[&str], affinity: Option<Branch>, base: f64) -> DomainRule {
    DomainRule {
        domain: domain.to_string(),
        required_skills: SkillSet::from_tokens(required.iter().copied()),
        branch_affinity: affinity,
        base_confidence: base,
    }
}

/// Map a candidate's features onto recommended career domains.
///
/// For each rule, confidence is the base confidence scaled by the fraction
/// of required skills the candidate holds, plus the affinity bonus when the
/// candidate's branch matches the rule's, capped at 1.0. Domains below the
/// table's cutoff are excluded. The output is sorted by confidence
/// descending, then domain name ascending for a total order.
pub fn map_to_domains(features: &ProfileFeatures, table: &RuleTable) -> Vec<CareerRecommendation> {
    let mut recommendations = Vec::new();

    for rule in table.rules() {
        if rule.required_skills.is_empty() {
            tracing::debug!(domain = rule.domain.as_str(), "skipping rule without required skills");
            continue;
        }

        let matched = features.skills.intersection(&rule.required_skills);
        let ratio = matched.len() as f64 / rule.required_skills.len() as f64;
        let branch_aligned = rule.branch_affinity == Some(features.branch);

        let mut confidence = rule.base_confidence * ratio;
        if branch_aligned {
            confidence += table.affinity_bonus();
        }
        let confidence = confidence.min(1.0);

        if confidence < table.confidence_cutoff() {
            continue;
        }

        let missing = rule.required_skills.difference(&matched);
        let rationale = describe(&rule.domain, &matched, rule.required_skills.len(), branch_aligned, features.branch);

        recommendations.push(CareerRecommendation {
            domain: rule.domain.clone(),
            confidence,
            matched_skills: matched,
            missing_skills: missing,
            rationale,
        });
    }

    recommendations.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.domain.cmp(&b.domain))
    });

    recommendations
}

fn describe(
    domain: &str,
    matched: &SkillSet,
    required_count: usize,
    branch_aligned: bool,
    branch: Branch,
) -> String {
    let mut rationale = if matched.is_empty() {
        format!("No core {domain} skills found on the profile")
    } else {
        format!(
            "Matched {} of {} core skills: {}",
            matched.len(),
            required_count,
            matched.to_joined()
        )
    };

    if branch_aligned {
        rationale.push_str(&format!("; {} branch aligns with this domain", branch.as_str()));
    }

    rationale
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::features::{validate_cgpa, Branch, ValidationError};
use crate::types::identifiers::{JobId, RecordVersion};
use crate::types::skills::SkillSet;

/// The derived, validated requirement view of one job posting record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: JobId,
    pub required_skills: SkillSet,
    pub preferred_skills: SkillSet,
    pub min_cgpa: f64,
    /// Empty set means any branch is acceptable.
    pub branch_preferences: BTreeSet<Branch>,
    pub min_experience_years: u32,
    pub version: RecordVersion,
}

impl JobRequirement {
    /// Derive a validated requirement from a job posting's fields.
    ///
    /// This is the ONLY way to construct a JobRequirement.
    /// It enforces all invariants: validation, versioning, and immutability.
    pub fn derive(
        id: JobId,
        required_skills: SkillSet,
        preferred_skills: SkillSet,
        min_cgpa: f64,
        branch_preferences: BTreeSet<Branch>,
        min_experience_years: u32,
    ) -> Result<Self, ValidationError> {
        validate_cgpa(min_cgpa)?;

        let version = fingerprint(
            &id,
            &required_skills,
            &preferred_skills,
            min_cgpa,
            &branch_preferences,
            min_experience_years,
        );

        Ok(JobRequirement {
            id,
            required_skills,
            preferred_skills,
            min_cgpa,
            branch_preferences,
            min_experience_years,
            version,
        })
    }

    /// True when the posting names no skills at all, in which case the
    /// skills factor is trivially satisfied.
    pub fn has_no_skill_requirements(&self) -> bool {
        self.required_skills.is_empty() && self.preferred_skills.is_empty()
    }
}

fn fingerprint(
    id: &JobId,
    required_skills: &SkillSet,
    preferred_skills: &SkillSet,
    min_cgpa: f64,
    branch_preferences: &BTreeSet<Branch>,
    min_experience_years: u32,
) -> RecordVersion {
    let branches = branch_preferences
        .iter()
        .map(|b| b.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let canonical = format!(
        "job\nid:{}\nrequired:{}\npreferred:{}\nmin_cgpa:{:016x}\nbranches:{}\nmin_experience:{}\n",
        id.as_str(),
        required_skills.to_joined(),
        preferred_skills.to_joined(),
        min_cgpa.to_bits(),
        branches,
        min_experience_years,
    );

    RecordVersion::from_content(canonical.as_bytes())
}

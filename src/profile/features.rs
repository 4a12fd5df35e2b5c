use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{ProfileId, RecordVersion};
use crate::types::skills::SkillSet;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("CGPA must be a finite number, got {0}")]
    CgpaNotFinite(f64),
    #[error("CGPA must lie within 0.0..=10.0, got {0}")]
    CgpaOutOfRange(f64),
}

/// Academic branches the platform serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Cse,
    Ece,
    Eee,
    Mech,
    Civil,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::Cse => "cse",
            Branch::Ece => "ece",
            Branch::Eee => "eee",
            Branch::Mech => "mech",
            Branch::Civil => "civil",
        }
    }
}

/// The derived, validated feature view of one candidate record.
/// Experience is unsigned, so negative years are unrepresentable rather
/// than merely rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFeatures {
    pub id: ProfileId,
    pub skills: SkillSet,
    pub cgpa: f64,
    pub branch: Branch,
    pub experience_years: u32,
    pub certifications: SkillSet,
    pub version: RecordVersion,
}

impl ProfileFeatures {
    /// Derive validated features from a profile record's fields.
    ///
    /// This is the ONLY way to construct ProfileFeatures.
    /// It enforces all invariants: validation, versioning, and immutability.
    pub fn derive(
        id: ProfileId,
        skills: SkillSet,
        cgpa: f64,
        branch: Branch,
        experience_years: u32,
        certifications: SkillSet,
    ) -> Result<Self, ValidationError> {
        validate_cgpa(cgpa)?;

        // Version computed after validation, so a fingerprint never
        // describes a rejected record.
        let version = fingerprint(&id, &skills, cgpa, branch, experience_years, &certifications);

        Ok(ProfileFeatures {
            id,
            skills,
            cgpa,
            branch,
            experience_years,
            certifications,
            version,
        })
    }
}

/// CGPA rules shared with JobRequirement's minimum. The only permitted
/// clamping of a CGPA anywhere in the core is the extractor's documented
/// clamp; stored records must already be in range.
pub(crate) fn validate_cgpa(cgpa: f64) -> Result<(), ValidationError> {
    if !cgpa.is_finite() {
        return Err(ValidationError::CgpaNotFinite(cgpa));
    }
    if !(0.0..=10.0).contains(&cgpa) {
        return Err(ValidationError::CgpaOutOfRange(cgpa));
    }

    Ok(())
}

/// Canonical byte encoding for the version fingerprint. Field order is
/// fixed; the CGPA is encoded via its bit pattern so float formatting can
/// never change the fingerprint of an unchanged record.
fn fingerprint(
    id: &ProfileId,
    skills: &SkillSet,
    cgpa: f64,
    branch: Branch,
    experience_years: u32,
    certifications: &SkillSet,
) -> RecordVersion {
    let canonical = format!(
        "profile\nid:{}\nskills:{}\ncgpa:{:016x}\nbranch:{}\nexperience:{}\ncertifications:{}\n",
        id.as_str(),
        skills.to_joined(),
        cgpa.to_bits(),
        branch.as_str(),
        experience_years,
        certifications.to_joined(),
    );

    RecordVersion::from_content(canonical.as_bytes())
}

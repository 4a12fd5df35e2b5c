pub mod identifiers;
pub mod report;
pub mod skills;

pub use identifiers::{IdentifierError, JobId, ProfileId, RecordVersion};
pub use report::{CareerRecommendation, FactorScore, MatchResult, ScoreBreakdown};
pub use skills::SkillSet;

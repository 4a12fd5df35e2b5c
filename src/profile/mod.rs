pub mod features;
pub mod job;

pub use crate::types::identifiers::{JobId, ProfileId, RecordVersion};
pub use features::{Branch, ProfileFeatures, ValidationError};
pub use job::JobRequirement;

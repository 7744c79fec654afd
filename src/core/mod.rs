// Core algorithm exports
pub mod experience;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use experience::{experience_ordinal, ExperienceLevel};
pub use filters::{classify_availability, AvailabilityClass};
pub use matcher::{Matcher, MatchResult};
pub use scoring::{job_score_breakdown, score_apprentice_shop, score_job, shop_score_breakdown};

//! Apprentice Match - scoring engine pairing electrical shops with apprentices
//!
//! This library ranks shops for an apprentice, apprentices for a shop, and
//! active job postings for an apprentice. Scoring is pure and deterministic;
//! callers supply every record and nothing is stored.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Matcher, MatchResult, ExperienceLevel, score_apprentice_shop, score_job};
pub use models::{JobPosting, Profile, ScoredCandidate, ShopScoringWeights, JobScoringWeights, MatchThresholds};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        let apprentice = Profile::new("a", "Oakland", "CA");
        let shop = Profile::new("s", "Oakland", "CA");
        // state + city + one level below preference
        assert_eq!(matcher.score_apprentice_shop(&apprentice, &shop), 45);
    }
}

// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    JobPosting, JobScoreBreakdown, JobScoringWeights, MatchThresholds, Profile, ScoredCandidate,
    ShopScoreBreakdown, ShopScoringWeights,
};
pub use requests::{ApprenticeMatchesRequest, RecommendJobsRequest, ScoreRequest, ShopMatchesRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchesResponse};

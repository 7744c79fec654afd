use serde::{Deserialize, Serialize};
use validator::Validate;

/// A marketplace party: either an apprentice or an electrical shop.
///
/// Shops typically only carry identity and location; the scoring fields are
/// read from whichever profile sits in the apprentice position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "experienceLevel", default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "completedJobs", default, skip_serializing_if = "Option::is_none")]
    pub completed_jobs: Option<u32>,
}

impl Profile {
    /// Minimal profile with only identity and location set
    pub fn new(id: impl Into<String>, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            city: city.into(),
            state: state.into(),
            skills: Vec::new(),
            experience_level: None,
            availability: None,
            rating: None,
            completed_jobs: None,
        }
    }

    pub fn experience(&self) -> Option<&str> {
        self.experience_level.as_deref()
    }

    pub fn availability(&self) -> Option<&str> {
        self.availability.as_deref()
    }
}

/// A job posted by a shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "shopId")]
    pub shop_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(rename = "experienceLevel", default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool { true }

/// A candidate annotated with its match score.
///
/// The candidate is flattened on the wire, so a scored profile serializes as
/// the original record plus a `matchScore` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate<T> {
    #[serde(flatten)]
    pub candidate: T,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Per-factor points behind an apprentice/shop score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopScoreBreakdown {
    pub state: u32,
    pub city: u32,
    pub experience: u32,
    pub availability: u32,
    pub skills: u32,
    pub rating: u32,
    pub total: u8,
}

/// Per-factor points behind a job recommendation score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobScoreBreakdown {
    pub experience: u32,
    pub availability: u32,
    pub skills: u32,
    pub location: u32,
    pub total: u8,
}

/// Weights for the apprentice/shop formula
#[derive(Debug, Clone, PartialEq)]
pub struct ShopScoringWeights {
    pub same_state: u32,
    pub same_city: u32,
    pub experience_met: u32,
    pub experience_near: u32,
    pub full_availability: u32,
    pub part_time_availability: u32,
    pub skill_point: u32,
    pub skill_cap: u32,
    pub high_rating: u32,
    pub mid_rating: u32,
    /// Ordinal the shop expects an apprentice to reach
    pub shop_preference: u8,
    pub canonical_skills: Vec<String>,
}

impl Default for ShopScoringWeights {
    fn default() -> Self {
        Self {
            same_state: 20,
            same_city: 10,
            experience_met: 25,
            experience_near: 15,
            full_availability: 20,
            part_time_availability: 10,
            skill_point: 3,
            skill_cap: 15,
            high_rating: 10,
            mid_rating: 5,
            shop_preference: 2,
            canonical_skills: default_canonical_skills(),
        }
    }
}

pub fn default_canonical_skills() -> Vec<String> {
    [
        "Basic Electrical Theory",
        "Wiring Installation",
        "Safety Protocols",
        "Hand Tools",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Weights for the job recommendation formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobScoringWeights {
    pub experience_exact: u32,
    pub experience_entry: u32,
    pub availability: u32,
    pub skill_point: u32,
    pub skill_cap: u32,
    pub location: u32,
}

impl Default for JobScoringWeights {
    fn default() -> Self {
        Self {
            experience_exact: 30,
            experience_entry: 25,
            availability: 25,
            skill_point: 5,
            skill_cap: 25,
            location: 20,
        }
    }
}

/// Minimum scores a candidate needs to be returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchThresholds {
    pub shop: u8,
    pub job: u8,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self { shop: 40, job: 30 }
    }
}

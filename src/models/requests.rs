use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;
use crate::models::domain::{JobPosting, Profile};

/// Request to rank shops for an apprentice
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShopMatchesRequest {
    #[validate(nested)]
    pub apprentice: Profile,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shops: Vec<Profile>,
}

/// Request to rank apprentices for a shop
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApprenticeMatchesRequest {
    #[validate(nested)]
    pub shop: Profile,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub apprentices: Vec<Profile>,
}

/// Request to recommend jobs to an apprentice
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendJobsRequest {
    #[validate(nested)]
    pub apprentice: Profile,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub jobs: Vec<JobPosting>,
}

/// Request to explain a single apprentice/shop score
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub apprentice: Profile,
    #[validate(nested)]
    pub shop: Profile,
}

/// Treat an explicit `null` candidate list the same as a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_candidates_are_empty() {
        let req: ShopMatchesRequest =
            serde_json::from_str(r#"{"apprentice":{"id":"a1"},"shops":null}"#).unwrap();
        assert!(req.shops.is_empty());

        let req: RecommendJobsRequest = serde_json::from_str(r#"{"apprentice":{"id":"a1"}}"#).unwrap();
        assert!(req.jobs.is_empty());
    }
}

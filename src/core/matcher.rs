use crate::models::{
    JobPosting, JobScoringWeights, MatchThresholds, Profile, ScoredCandidate, ShopScoreBreakdown,
    ShopScoringWeights,
};
use crate::core::scoring::{score_apprentice_shop, score_job, shop_score_breakdown};

/// Result of a ranking pass
#[derive(Debug)]
pub struct MatchResult<T> {
    pub matches: Vec<ScoredCandidate<T>>,
    pub total_candidates: usize,
}

/// Ranks candidates against a reference profile
///
/// # Pipeline Stages
/// 1. Eligibility filter (inactive jobs are dropped)
/// 2. Scoring
/// 3. Threshold filter
/// 4. Stable descending sort by score
///
/// Holds no mutable state; clone it freely across workers.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    shop_weights: ShopScoringWeights,
    job_weights: JobScoringWeights,
    thresholds: MatchThresholds,
}

impl Matcher {
    pub fn new(
        shop_weights: ShopScoringWeights,
        job_weights: JobScoringWeights,
        thresholds: MatchThresholds,
    ) -> Self {
        Self {
            shop_weights,
            job_weights,
            thresholds,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::default()
    }

    pub fn shop_weights(&self) -> &ShopScoringWeights {
        &self.shop_weights
    }

    pub fn job_weights(&self) -> &JobScoringWeights {
        &self.job_weights
    }

    pub fn thresholds(&self) -> MatchThresholds {
        self.thresholds
    }

    /// Score a single apprentice against a single shop
    pub fn score_apprentice_shop(&self, apprentice: &Profile, shop: &Profile) -> u8 {
        score_apprentice_shop(apprentice, shop, &self.shop_weights)
    }

    /// Per-factor explanation of `score_apprentice_shop`
    pub fn explain_apprentice_shop(&self, apprentice: &Profile, shop: &Profile) -> ShopScoreBreakdown {
        shop_score_breakdown(apprentice, shop, &self.shop_weights)
    }

    /// Rank shops for an apprentice.
    ///
    /// Returns only shops scoring at least the shop threshold, best first.
    pub fn find_shop_matches(&self, apprentice: &Profile, shops: &[Profile]) -> MatchResult<Profile> {
        let matches = rank(
            shops
                .iter()
                .map(|shop| (shop, self.score_apprentice_shop(apprentice, shop))),
            self.thresholds.shop,
        );

        tracing::debug!(
            apprentice = %apprentice.id,
            candidates = shops.len(),
            matches = matches.len(),
            "ranked shops"
        );

        MatchResult {
            matches,
            total_candidates: shops.len(),
        }
    }

    /// Rank apprentices for a shop.
    ///
    /// Each candidate is scored in the apprentice position against `shop`.
    pub fn find_apprentice_matches(&self, shop: &Profile, apprentices: &[Profile]) -> MatchResult<Profile> {
        let matches = rank(
            apprentices
                .iter()
                .map(|apprentice| (apprentice, self.score_apprentice_shop(apprentice, shop))),
            self.thresholds.shop,
        );

        tracing::debug!(
            shop = %shop.id,
            candidates = apprentices.len(),
            matches = matches.len(),
            "ranked apprentices"
        );

        MatchResult {
            matches,
            total_candidates: apprentices.len(),
        }
    }

    /// Recommend active jobs to an apprentice, best first
    pub fn recommend_jobs(&self, apprentice: &Profile, jobs: &[JobPosting]) -> MatchResult<JobPosting> {
        let matches = rank(
            jobs.iter()
                .filter(|job| job.is_active)
                .map(|job| (job, score_job(apprentice, job, &self.job_weights))),
            self.thresholds.job,
        );

        tracing::debug!(
            apprentice = %apprentice.id,
            candidates = jobs.len(),
            matches = matches.len(),
            "recommended jobs"
        );

        MatchResult {
            matches,
            total_candidates: jobs.len(),
        }
    }
}

/// Keep scores at or above `threshold` and sort them descending.
///
/// `sort_by` is stable, so equal scores keep their input order.
fn rank<'a, T, I>(scored: I, threshold: u8) -> Vec<ScoredCandidate<T>>
where
    T: Clone + 'a,
    I: Iterator<Item = (&'a T, u8)>,
{
    let mut matches: Vec<ScoredCandidate<T>> = scored
        .filter(|(_, score)| *score >= threshold)
        .map(|(candidate, score)| ScoredCandidate {
            candidate: candidate.clone(),
            match_score: score,
        })
        .collect();

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}

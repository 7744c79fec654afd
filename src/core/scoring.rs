use crate::models::{
    JobPosting, JobScoreBreakdown, JobScoringWeights, Profile, ShopScoreBreakdown,
    ShopScoringWeights,
};
use crate::core::{
    experience::experience_ordinal,
    filters::{
        availability_fits, canonical_skill_matches, classify_availability, experience_entry,
        experience_exact, job_in_state, required_skill_matches, same_city, same_state,
        AvailabilityClass,
    },
};

/// Highest score any formula may report
pub const MAX_SCORE: u32 = 100;

/// Break down the compatibility of an apprentice with a shop.
///
/// Scoring formula (default weights):
/// score = (
///     same_state     20 +
///     same_city      10 +   # only when the state also matches
///     experience     25 +   # 15 when one level below the shop preference
///     availability   20 +   # 10 for part-time
///     skills         15 +   # 3 per canonical skill
///     rating         10     # 5 for ratings in [3, 4)
/// )
///
/// The fields are read positionally: `apprentice` supplies experience,
/// availability, skills and rating; `shop` only contributes its location.
pub fn shop_score_breakdown(
    apprentice: &Profile,
    shop: &Profile,
    weights: &ShopScoringWeights,
) -> ShopScoreBreakdown {
    let state = if same_state(apprentice, shop) { weights.same_state } else { 0 };
    let city = if same_city(apprentice, shop) { weights.same_city } else { 0 };

    let experience = calculate_experience_points(apprentice, weights);

    let availability = match classify_availability(apprentice.availability()) {
        AvailabilityClass::Full => weights.full_availability,
        AvailabilityClass::Partial => weights.part_time_availability,
        AvailabilityClass::Unavailable => 0,
    };

    let skill_count = canonical_skill_matches(apprentice, &weights.canonical_skills).len() as u32;
    let skills = skill_count.saturating_mul(weights.skill_point).min(weights.skill_cap);

    let rating = calculate_rating_points(apprentice.rating, weights);

    ShopScoreBreakdown {
        state,
        city,
        experience,
        availability,
        skills,
        rating,
        total: clamp_score(sum_points(&[state, city, experience, availability, skills, rating])),
    }
}

/// Calculate an apprentice/shop match score (0-100)
#[inline]
pub fn score_apprentice_shop(
    apprentice: &Profile,
    shop: &Profile,
    weights: &ShopScoringWeights,
) -> u8 {
    shop_score_breakdown(apprentice, shop, weights).total
}

/// Break down how well a job suits an apprentice.
///
/// Scoring formula (default weights):
/// score = (
///     experience     30 +   # 25 for entry-level jobs offered to beginners
///     availability   25 +
///     skills         25 +   # 5 per apprentice skill found in the requirements
///     location       20
/// )
pub fn job_score_breakdown(
    apprentice: &Profile,
    job: &JobPosting,
    weights: &JobScoringWeights,
) -> JobScoreBreakdown {
    let experience = if experience_exact(apprentice, job) {
        weights.experience_exact
    } else if experience_entry(apprentice, job) {
        weights.experience_entry
    } else {
        0
    };

    let availability = if availability_fits(apprentice, job) { weights.availability } else { 0 };

    let skill_count = required_skill_matches(apprentice, job).len() as u32;
    let skills = skill_count.saturating_mul(weights.skill_point).min(weights.skill_cap);

    let location = if job_in_state(apprentice, job) { weights.location } else { 0 };

    JobScoreBreakdown {
        experience,
        availability,
        skills,
        location,
        total: clamp_score(sum_points(&[experience, availability, skills, location])),
    }
}

/// Calculate a job recommendation score (0-100)
#[inline]
pub fn score_job(apprentice: &Profile, job: &JobPosting, weights: &JobScoringWeights) -> u8 {
    job_score_breakdown(apprentice, job, weights).total
}

/// Experience points: full when the apprentice meets the shop preference,
/// partial when exactly one level short
#[inline]
fn calculate_experience_points(apprentice: &Profile, weights: &ShopScoringWeights) -> u32 {
    let ordinal = experience_ordinal(apprentice.experience());
    let preference = weights.shop_preference;

    if ordinal >= preference {
        weights.experience_met
    } else if ordinal.saturating_add(1) == preference {
        weights.experience_near
    } else {
        0
    }
}

#[inline]
fn calculate_rating_points(rating: Option<f64>, weights: &ShopScoringWeights) -> u32 {
    match rating {
        Some(r) if r >= 4.0 => weights.high_rating,
        Some(r) if r >= 3.0 => weights.mid_rating,
        _ => 0,
    }
}

/// Factor weights come from configuration, so the sum saturates instead of wrapping
#[inline]
fn sum_points(points: &[u32]) -> u32 {
    points.iter().fold(0, |acc, p| acc.saturating_add(*p))
}

#[inline]
fn clamp_score(total: u32) -> u8 {
    total.min(MAX_SCORE) as u8
}

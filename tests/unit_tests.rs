// Unit tests for Apprentice Match

use apprentice_match::core::{
    experience::experience_ordinal,
    scoring::{job_score_breakdown, score_apprentice_shop, score_job, shop_score_breakdown},
};
use apprentice_match::models::{JobPosting, JobScoringWeights, Profile, ShopScoringWeights};

fn apprentice(state: &str, city: &str, experience: Option<&str>, availability: Option<&str>) -> Profile {
    Profile {
        id: "apprentice".to_string(),
        name: None,
        city: city.to_string(),
        state: state.to_string(),
        skills: vec![],
        experience_level: experience.map(str::to_string),
        availability: availability.map(str::to_string),
        rating: None,
        completed_jobs: None,
    }
}

fn job(required: &[&str], experience: Option<&str>, availability: Option<&str>, location: &str) -> JobPosting {
    JobPosting {
        id: "job".to_string(),
        shop_id: "shop".to_string(),
        title: None,
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        experience_level: experience.map(str::to_string),
        availability: availability.map(str::to_string),
        location: location.to_string(),
        is_active: true,
    }
}

#[test]
fn test_oakland_apprentice_scores_88() {
    let mut profile = apprentice("CA", "Oakland", Some("intermediate"), Some("flexible"));
    profile.skills = vec!["Hand Tools".to_string()];
    profile.rating = Some(4.5);
    let shop = Profile::new("shop", "Oakland", "CA");

    assert_eq!(score_apprentice_shop(&profile, &shop, &ShopScoringWeights::default()), 88);
}

#[test]
fn test_out_of_state_beginner_scores_15() {
    let profile = apprentice("NY", "Buffalo", Some("beginner"), Some("weekends"));
    let shop = Profile::new("shop", "Oakland", "CA");

    let breakdown = shop_score_breakdown(&profile, &shop, &ShopScoringWeights::default());

    assert_eq!(breakdown.state, 0);
    assert_eq!(breakdown.experience, 15);
    assert_eq!(breakdown.availability, 0);
    assert_eq!(breakdown.total, 15);
}

#[test]
fn test_location_bonus_is_monotonic() {
    let weights = ShopScoringWeights::default();
    let shop = Profile::new("shop", "Oakland", "CA");

    let same_city = apprentice("CA", "Oakland", Some("beginner"), Some("part-time"));
    let same_state = apprentice("CA", "Fresno", Some("beginner"), Some("part-time"));
    let other_state = apprentice("NV", "Oakland", Some("beginner"), Some("part-time"));

    let city_score = score_apprentice_shop(&same_city, &shop, &weights);
    let state_score = score_apprentice_shop(&same_state, &shop, &weights);
    let other_score = score_apprentice_shop(&other_state, &shop, &weights);

    assert!(city_score >= state_score, "same city should not score below same state");
    assert!(state_score >= other_score, "same state should not score below other state");
    assert_eq!(other_score, 25);
}

#[test]
fn test_scores_are_deterministic() {
    let mut profile = apprentice("CA", "Oakland", Some("basic-experience"), Some("full-time"));
    profile.skills = vec!["Wiring Installation".to_string(), "Wiring".to_string()];
    profile.rating = Some(3.2);
    let shop = Profile::new("shop", "Oakland", "CA");
    let posting = job(&["Wiring Installation"], Some("basic-experience"), Some("full-time"), "Oakland, CA");

    let shop_weights = ShopScoringWeights::default();
    let job_weights = JobScoringWeights::default();

    assert_eq!(
        score_apprentice_shop(&profile, &shop, &shop_weights),
        score_apprentice_shop(&profile, &shop, &shop_weights)
    );
    assert_eq!(
        score_job(&profile, &posting, &job_weights),
        score_job(&profile, &posting, &job_weights)
    );
}

#[test]
fn test_scores_stay_in_range() {
    let shop_weights = ShopScoringWeights::default();
    let job_weights = JobScoringWeights::default();
    let labels = [None, Some("beginner"), Some("intermediate"), Some("expert")];
    let availabilities = [None, Some("full-time"), Some("part-time"), Some("flexible"), Some("weekends")];
    let ratings = [None, Some(0.0), Some(3.0), Some(5.0)];

    let shop = Profile::new("shop", "Oakland", "CA");
    let posting = job(&["Hand Tools", "Wiring Installation"], Some("beginner"), Some("full-time"), "Oakland, CA");

    for experience in labels {
        for availability in availabilities {
            for rating in ratings {
                let mut profile = apprentice("CA", "Oakland", experience, availability);
                profile.rating = rating;
                profile.skills = vec!["Hand Tools".to_string(); 8];

                assert!(score_apprentice_shop(&profile, &shop, &shop_weights) <= 100);
                assert!(score_job(&profile, &posting, &job_weights) <= 100);
            }
        }
    }
}

#[test]
fn test_job_skill_substring_match() {
    let mut profile = apprentice("", "", None, None);
    profile.skills = vec!["Wiring".to_string()];
    let posting = job(&["Wiring Installation"], None, None, "");

    let breakdown = job_score_breakdown(&profile, &posting, &JobScoringWeights::default());

    assert_eq!(breakdown.skills, 5);
    assert_eq!(breakdown.total, 5);
}

#[test]
fn test_job_skill_points_capped() {
    let mut profile = apprentice("", "", None, None);
    profile.skills = ["wir", "ing", "inst", "safe", "pro", "hand", "tools"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let posting = job(&["Wiring Installation", "Safety Protocols", "Hand Tools"], None, None, "");

    let breakdown = job_score_breakdown(&profile, &posting, &JobScoringWeights::default());
    assert_eq!(breakdown.skills, 25);
}

#[test]
fn test_missing_labels_do_not_match_each_other() {
    let profile = apprentice("CA", "Oakland", None, None);
    let posting = job(&[], None, None, "Remote");

    let breakdown = job_score_breakdown(&profile, &posting, &JobScoringWeights::default());

    assert_eq!(breakdown.experience, 0);
    assert_eq!(breakdown.availability, 0);
    assert_eq!(breakdown.total, 0);
}

#[test]
fn test_unknown_experience_ranks_as_beginner() {
    assert_eq!(experience_ordinal(Some("master electrician")), experience_ordinal(Some("beginner")));
}

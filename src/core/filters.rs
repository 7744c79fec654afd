use crate::models::{JobPosting, Profile};

const FULL_TIME: &str = "full-time";
const PART_TIME: &str = "part-time";
const FLEXIBLE: &str = "flexible";

/// How much of their week an apprentice can commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityClass {
    Full,
    Partial,
    Unavailable,
}

/// Classify an availability label for the shop formula.
///
/// `full-time` and `flexible` count as full availability, `part-time` as
/// partial; anything else (including `weekends`) scores nothing.
#[inline]
pub fn classify_availability(label: Option<&str>) -> AvailabilityClass {
    match label {
        Some(FULL_TIME) | Some(FLEXIBLE) => AvailabilityClass::Full,
        Some(PART_TIME) => AvailabilityClass::Partial,
        _ => AvailabilityClass::Unavailable,
    }
}

/// Both profiles are in the same, non-blank state
#[inline]
pub fn same_state(a: &Profile, b: &Profile) -> bool {
    !a.state.trim().is_empty() && a.state == b.state
}

/// Both profiles are in the same city of the same state
#[inline]
pub fn same_city(a: &Profile, b: &Profile) -> bool {
    same_state(a, b) && !a.city.trim().is_empty() && a.city == b.city
}

/// Apprentice skills that appear verbatim in the canonical skill set
pub fn canonical_skill_matches(profile: &Profile, canonical: &[String]) -> Vec<String> {
    profile
        .skills
        .iter()
        .filter(|skill| canonical.contains(skill))
        .cloned()
        .collect()
}

/// Apprentice skills contained (case-insensitively) in any required job skill.
///
/// Matching is deliberately loose: `Wiring` matches `Wiring Installation`.
pub fn required_skill_matches(profile: &Profile, job: &JobPosting) -> Vec<String> {
    let required: Vec<String> = job
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    profile
        .skills
        .iter()
        .filter(|skill| {
            let needle = skill.to_lowercase();
            !skill.trim().is_empty() && required.iter().any(|req| req.contains(&needle))
        })
        .cloned()
        .collect()
}

/// Experience labels are identical (both present)
#[inline]
pub fn experience_exact(profile: &Profile, job: &JobPosting) -> bool {
    matches!((profile.experience(), job.experience_level.as_deref()), (Some(a), Some(j)) if a == j)
}

/// Entry-level job offered to a self-described beginner
#[inline]
pub fn experience_entry(profile: &Profile, job: &JobPosting) -> bool {
    job.experience_level.as_deref() == Some("entry-level") && profile.experience() == Some("beginner")
}

/// Apprentice can work the hours the job asks for
#[inline]
pub fn availability_fits(profile: &Profile, job: &JobPosting) -> bool {
    match (profile.availability(), job.availability.as_deref()) {
        (Some(FLEXIBLE), _) => true,
        (Some(a), Some(j)) => a == j,
        _ => false,
    }
}

/// Job's free-text location mentions the apprentice's state
#[inline]
pub fn job_in_state(profile: &Profile, job: &JobPosting) -> bool {
    let state = profile.state.trim();
    !state.is_empty() && job.location.contains(state)
}

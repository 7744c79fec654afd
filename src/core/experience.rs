/// Experience levels an apprentice can report, in increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Beginner,
    SomeKnowledge,
    BasicExperience,
    Intermediate,
}

impl ExperienceLevel {
    /// Parse a wire label such as `some-knowledge`
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "beginner" => Some(Self::Beginner),
            "some-knowledge" => Some(Self::SomeKnowledge),
            "basic-experience" => Some(Self::BasicExperience),
            "intermediate" => Some(Self::Intermediate),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::SomeKnowledge => "some-knowledge",
            Self::BasicExperience => "basic-experience",
            Self::Intermediate => "intermediate",
        }
    }

    /// 1-based rank used by the shop scoring formula
    pub fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::SomeKnowledge => 2,
            Self::BasicExperience => 3,
            Self::Intermediate => 4,
        }
    }
}

/// Map an optional experience label to its ordinal.
///
/// Absent and unrecognised labels rank as `beginner`.
pub fn experience_ordinal(label: Option<&str>) -> u8 {
    match label {
        Some(raw) => match ExperienceLevel::from_label(raw) {
            Some(level) => level.ordinal(),
            None => {
                tracing::debug!(label = raw, "unknown experience level, ranking as beginner");
                ExperienceLevel::Beginner.ordinal()
            }
        },
        None => ExperienceLevel::Beginner.ordinal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(experience_ordinal(Some("beginner")), 1);
        assert_eq!(experience_ordinal(Some("some-knowledge")), 2);
        assert_eq!(experience_ordinal(Some("basic-experience")), 3);
        assert_eq!(experience_ordinal(Some("intermediate")), 4);
    }

    #[test]
    fn test_unknown_label_defaults_to_beginner() {
        assert_eq!(experience_ordinal(Some("journeyman")), 1);
        assert_eq!(experience_ordinal(Some("Intermediate")), 1);
        assert_eq!(experience_ordinal(None), 1);
    }

    #[test]
    fn test_label_round_trip() {
        for level in [
            ExperienceLevel::Beginner,
            ExperienceLevel::SomeKnowledge,
            ExperienceLevel::BasicExperience,
            ExperienceLevel::Intermediate,
        ] {
            assert_eq!(ExperienceLevel::from_label(level.label()), Some(level));
        }
        assert!(ExperienceLevel::Beginner < ExperienceLevel::Intermediate);
    }
}

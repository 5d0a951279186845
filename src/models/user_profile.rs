use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::validation::ProfileError;

/// Primary training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    Hypertrophy,
    FatLoss,
    Strength,
    Conditioning,
}

/// How a goal picks its exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCategory {
    /// Exercises drawn per target muscle group of the split
    MuscleDriven,
    /// Exercises drawn from the shared cardio/functional list
    CircuitDriven,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::Hypertrophy,
        Goal::FatLoss,
        Goal::Strength,
        Goal::Conditioning,
    ];

    /// Parse a raw goal, falling back to hypertrophy for anything unrecognized
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::debug!("Unrecognized goal {:?}, using hypertrophy", raw);
            Goal::Hypertrophy
        })
    }

    /// Label used in rendered text
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Hypertrophy => "hipertrofia",
            Goal::FatLoss => "emagrecimento",
            Goal::Strength => "força",
            Goal::Conditioning => "condicionamento",
        }
    }

    pub fn category(&self) -> GoalCategory {
        match self {
            Goal::Hypertrophy | Goal::Strength => GoalCategory::MuscleDriven,
            Goal::FatLoss | Goal::Conditioning => GoalCategory::CircuitDriven,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Goal {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hypertrophy" | "hipertrofia" => Ok(Goal::Hypertrophy),
            "fat-loss" | "fat_loss" | "fatloss" | "emagrecimento" => Ok(Goal::FatLoss),
            "strength" | "força" | "forca" => Ok(Goal::Strength),
            "conditioning" | "condicionamento" => Ok(Goal::Conditioning),
            _ => Err(ProfileError::UnknownGoal(s.to_string())),
        }
    }
}

/// Training experience of the athlete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Parse a raw level, falling back to intermediate for anything unrecognized
    pub fn normalize(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            tracing::debug!("Unrecognized experience level {:?}, using intermediate", raw);
            ExperienceLevel::Intermediate
        })
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "iniciante",
            ExperienceLevel::Intermediate => "intermediário",
            ExperienceLevel::Advanced => "avançado",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "iniciante" => Ok(ExperienceLevel::Beginner),
            "intermediate" | "intermediário" | "intermediario" => Ok(ExperienceLevel::Intermediate),
            "advanced" | "avançado" | "avancado" => Ok(ExperienceLevel::Advanced),
            _ => Err(ProfileError::UnknownExperience(s.to_string())),
        }
    }
}

/// Validated user attributes consumed by the metrics and plan services.
///
/// Fields are private so a profile cannot be changed after construction;
/// the numeric constraints (positive weight and height, at least one
/// session per week) hold for every instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    age: u32,
    weight_kg: f64,
    height_cm: Option<f64>,
    training_frequency: u32,
    primary_goal: Goal,
    experience_level: ExperienceLevel,
    restrictions: Option<String>,
    additional_notes: Option<String>,
}

impl UserProfile {
    /// Create a profile without height or free-text notes
    pub fn new(
        age: u32,
        weight_kg: f64,
        training_frequency: u32,
        primary_goal: Goal,
        experience_level: ExperienceLevel,
    ) -> Result<Self, ProfileError> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(ProfileError::NonPositiveWeight);
        }
        if training_frequency == 0 {
            return Err(ProfileError::ZeroFrequency);
        }

        Ok(Self {
            age,
            weight_kg,
            height_cm: None,
            training_frequency,
            primary_goal,
            experience_level,
            restrictions: None,
            additional_notes: None,
        })
    }

    pub fn with_height(mut self, height_cm: f64) -> Result<Self, ProfileError> {
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(ProfileError::NonPositiveHeight);
        }
        self.height_cm = Some(height_cm);
        Ok(self)
    }

    /// Attach restrictions; blank text is dropped
    pub fn with_restrictions(mut self, restrictions: Option<String>) -> Self {
        self.restrictions = non_blank(restrictions);
        self
    }

    /// Attach additional notes; blank text is dropped
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.additional_notes = non_blank(notes);
        self
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    pub fn training_frequency(&self) -> u32 {
        self.training_frequency
    }

    pub fn primary_goal(&self) -> Goal {
        self.primary_goal
    }

    pub fn experience_level(&self) -> ExperienceLevel {
        self.experience_level
    }

    pub fn restrictions(&self) -> Option<&str> {
        self.restrictions.as_deref()
    }

    pub fn additional_notes(&self) -> Option<&str> {
        self.additional_notes.as_deref()
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_parsing_accepts_both_vocabularies() {
        assert_eq!("Hypertrophy".parse::<Goal>().unwrap(), Goal::Hypertrophy);
        assert_eq!("  fat-loss ".parse::<Goal>().unwrap(), Goal::FatLoss);
        assert_eq!("Emagrecimento".parse::<Goal>().unwrap(), Goal::FatLoss);
        assert_eq!("Força".parse::<Goal>().unwrap(), Goal::Strength);
        assert_eq!("forca".parse::<Goal>().unwrap(), Goal::Strength);
        assert_eq!("CONDICIONAMENTO".parse::<Goal>().unwrap(), Goal::Conditioning);
        assert!("yoga".parse::<Goal>().is_err());
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        assert_eq!(Goal::normalize("powerlifting"), Goal::Hypertrophy);
        assert_eq!(Goal::normalize(""), Goal::Hypertrophy);
        assert_eq!(ExperienceLevel::normalize("elite"), ExperienceLevel::Intermediate);
        assert_eq!(ExperienceLevel::normalize(" Avançado "), ExperienceLevel::Advanced);
    }

    #[test]
    fn test_goal_categories() {
        assert_eq!(Goal::Hypertrophy.category(), GoalCategory::MuscleDriven);
        assert_eq!(Goal::Strength.category(), GoalCategory::MuscleDriven);
        assert_eq!(Goal::FatLoss.category(), GoalCategory::CircuitDriven);
        assert_eq!(Goal::Conditioning.category(), GoalCategory::CircuitDriven);
    }

    #[test]
    fn test_profile_rejects_invalid_numbers() {
        let goal = Goal::Hypertrophy;
        let level = ExperienceLevel::Beginner;

        assert_eq!(
            UserProfile::new(30, 0.0, 3, goal, level),
            Err(ProfileError::NonPositiveWeight)
        );
        assert_eq!(
            UserProfile::new(30, f64::NAN, 3, goal, level),
            Err(ProfileError::NonPositiveWeight)
        );
        assert_eq!(
            UserProfile::new(30, 70.0, 0, goal, level),
            Err(ProfileError::ZeroFrequency)
        );

        let profile = UserProfile::new(30, 70.0, 3, goal, level).unwrap();
        assert_eq!(profile.with_height(-1.0), Err(ProfileError::NonPositiveHeight));
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let profile = UserProfile::new(30, 70.0, 3, Goal::Strength, ExperienceLevel::Advanced)
            .unwrap()
            .with_restrictions(Some("   ".to_string()))
            .with_notes(Some(" prefere treinos curtos ".to_string()));

        assert_eq!(profile.restrictions(), None);
        assert_eq!(profile.additional_notes(), Some("prefere treinos curtos"));
    }
}

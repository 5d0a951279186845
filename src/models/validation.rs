use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::user_profile::{ExperienceLevel, Goal, UserProfile};

/// Rejections raised at the input boundary, before the pipeline runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("height must be numeric (e.g. 175), got {0:?}")]
    InvalidHeight(String),

    #[error("height must be greater than zero")]
    NonPositiveHeight,

    #[error("weight must be greater than zero")]
    NonPositiveWeight,

    #[error("training frequency must be at least one session per week")]
    ZeroFrequency,

    #[error("unknown goal: {0}")]
    UnknownGoal(String),

    #[error("unknown experience level: {0}")]
    UnknownExperience(String),
}

/// Raw profile as collected by a form or command line.
///
/// Height stays textual because the form accepts it as free text; goal and
/// experience are normalized rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInput {
    pub age: u32,
    pub weight_kg: f64,
    pub height: Option<String>,
    pub training_frequency: u32,
    pub goal: String,
    pub experience_level: String,
    pub restrictions: Option<String>,
    pub notes: Option<String>,
}

impl ProfileInput {
    /// Turn the raw input into an immutable profile
    pub fn validate(self) -> Result<UserProfile, ProfileError> {
        let height_cm = validate_height(self.height.as_deref())?;

        let profile = UserProfile::new(
            self.age,
            self.weight_kg,
            self.training_frequency,
            Goal::normalize(&self.goal),
            ExperienceLevel::normalize(&self.experience_level),
        )?
        .with_restrictions(self.restrictions)
        .with_notes(self.notes);

        match height_cm {
            Some(height) => profile.with_height(height),
            None => Ok(profile),
        }
    }
}

/// Height validation; blank input means "not supplied"
pub fn validate_height(raw: Option<&str>) -> Result<Option<f64>, ProfileError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    let height: f64 = raw
        .replace(',', ".")
        .parse()
        .map_err(|_| ProfileError::InvalidHeight(raw.to_string()))?;

    if !(height.is_finite() && height > 0.0) {
        return Err(ProfileError::NonPositiveHeight);
    }

    Ok(Some(height))
}

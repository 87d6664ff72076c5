use std::fmt;

use chrono::NaiveDate;
use derive_more::{Deref, Display};
use strum::{EnumIter, IntoEnumIterator};

use crate::{Name, NameError};

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: UserID,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub height_cm: f32,
    pub weight_kg: f32,
    pub body_fat_pct: Option<f32>,
    pub resting_hr: Option<u32>,
    pub activity_level: ActivityLevel,
    pub goals: String,
    pub injury_history: Option<String>,
}

impl UserProfile {
    /// Check all fields and return the first violated rule.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_date_of_birth(self.date_of_birth, today)?;
        validate_height(self.height_cm)?;
        validate_weight(self.weight_kg)?;
        if let Some(body_fat_pct) = self.body_fat_pct {
            validate_body_fat(body_fat_pct)?;
        }
        if let Some(resting_hr) = self.resting_hr {
            validate_resting_hr(resting_hr)?;
        }
        validate_goals(&self.goals)?;
        Ok(())
    }
}

#[derive(Deref, Display, Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserID(String);

impl From<String> for UserID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl TryFrom<&str> for Gender {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Gender::iter()
            .find(|g| g.to_string() == value)
            .ok_or_else(|| ValidationError::Gender(value.to_string()))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Male => "male",
                Gender::Female => "female",
                Gender::Other => "other",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumIter)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little or no exercise",
            ActivityLevel::LightlyActive => "light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "hard exercise 6-7 days/week",
            ActivityLevel::ExtremelyActive => {
                "very hard exercise, physical job or training twice a day"
            }
        }
    }

    /// Label of the level in the profile form, e.g. "Sedentary (little or no exercise)".
    #[must_use]
    pub fn option_label(self) -> String {
        format!("{self} ({})", self.description())
    }
}

impl TryFrom<&str> for ActivityLevel {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ActivityLevel::iter()
            .find(|l| l.key() == value)
            .ok_or_else(|| ValidationError::ActivityLevel(value.to_string()))
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ActivityLevel::Sedentary => "Sedentary",
                ActivityLevel::LightlyActive => "Lightly Active",
                ActivityLevel::ModeratelyActive => "Moderately Active",
                ActivityLevel::VeryActive => "Very Active",
                ActivityLevel::ExtremelyActive => "Extremely Active",
            }
        )
    }
}

pub fn validate_name(name: &str) -> Result<Name, ValidationError> {
    Name::new(name).map_err(ValidationError::Name)
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::Email(email.to_string());
    let (local, domain) = email.trim().split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || local.contains(char::is_whitespace) || domain.contains('@') {
        return Err(invalid());
    }
    let labels = domain.split('.').collect::<Vec<_>>();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.contains(char::is_whitespace))
    {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_date_of_birth(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date > today {
        return Err(ValidationError::DateOfBirth(date));
    }
    Ok(())
}

pub fn validate_height(height_cm: f32) -> Result<(), ValidationError> {
    if !(100.0..=250.0).contains(&height_cm) {
        return Err(ValidationError::Height(height_cm));
    }
    Ok(())
}

pub fn validate_weight(weight_kg: f32) -> Result<(), ValidationError> {
    if !(30.0..=250.0).contains(&weight_kg) {
        return Err(ValidationError::Weight(weight_kg));
    }
    Ok(())
}

pub fn validate_body_fat(body_fat_pct: f32) -> Result<(), ValidationError> {
    if !(3.0..=50.0).contains(&body_fat_pct) {
        return Err(ValidationError::BodyFat(body_fat_pct));
    }
    Ok(())
}

pub fn validate_resting_hr(resting_hr: u32) -> Result<(), ValidationError> {
    if !(40..=200).contains(&resting_hr) {
        return Err(ValidationError::RestingHeartRate(resting_hr));
    }
    Ok(())
}

pub fn validate_goals(goals: &str) -> Result<(), ValidationError> {
    let len = goals.trim().chars().count();
    if len < 10 {
        return Err(ValidationError::Goals(len));
    }
    Ok(())
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    Name(NameError),
    #[error("Invalid email address ({0})")]
    Email(String),
    #[error("Unknown gender ({0})")]
    Gender(String),
    #[error("Date of birth must not be in the future ({0})")]
    DateOfBirth(NaiveDate),
    #[error("Height must be between 100 and 250 cm ({0})")]
    Height(f32),
    #[error("Weight must be between 30 and 250 kg ({0})")]
    Weight(f32),
    #[error("Body fat must be between 3 and 50 % ({0})")]
    BodyFat(f32),
    #[error("Resting heart rate must be between 40 and 200 bpm ({0})")]
    RestingHeartRate(u32),
    #[error("Goals must be described in at least 10 characters ({0} < 10)")]
    Goals(usize),
    #[error("Unknown activity level ({0})")]
    ActivityLevel(String),
}

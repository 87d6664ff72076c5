#![warn(clippy::pedantic)]

use fitai_domain as domain;

pub mod exercise_filter;
pub mod log;
pub mod notification;
pub mod summary;

pub use exercise_filter::{ExerciseFilter, equipment_types, muscle_groups};
pub use notification::Toasts;
pub use summary::PlanSummary;

#[allow(clippy::missing_errors_doc)]
pub trait Repository {
    fn read_settings(&self) -> Result<Settings, domain::ReadError>;
    fn write_settings(&self, settings: &Settings) -> Result<(), domain::WriteError>;

    fn read_profile(&self) -> Result<Option<domain::UserProfile>, domain::ReadError>;
    fn write_profile(&self, profile: &domain::UserProfile) -> Result<(), domain::WriteError>;
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub default_days_per_week: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            default_days_per_week: 3,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

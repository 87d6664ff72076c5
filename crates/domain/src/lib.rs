#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod name;
mod notification;
mod plan;
mod profile;
mod progress;
mod store;
pub mod templates;

pub use catalog::ExerciseDefinition;
pub use error::{GenerateError, ReadError, StorageError, WriteError};
pub use name::{Name, NameError};
pub use notification::{Notification, NotificationKind, Notifier};
pub use plan::{DAYS_PER_WEEK, Day, MalformedPlanError, PlanID, PlannedExercise, Week, WorkoutPlan};
pub use profile::{
    ActivityLevel, Gender, UserID, UserProfile, ValidationError, validate_body_fat,
    validate_date_of_birth, validate_email, validate_goals, validate_height, validate_name,
    validate_resting_hr, validate_weight,
};
pub use progress::{ProgressID, WorkoutProgressRecord, WorkoutStats};
pub use store::{Clock, IdGenerator, PlanRepository, PlanStore, RandomID, State, SystemClock};
pub use templates::{TemplateRepository, Templates};

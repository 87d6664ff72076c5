use chrono::{DateTime, NaiveDate, Utc};
use fitai_domain as domain;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub generated_on: DateTime<Utc>,
    pub name: String,
    pub weeks: Vec<Week>,
}

impl From<&domain::WorkoutPlan> for WorkoutPlan {
    fn from(value: &domain::WorkoutPlan) -> Self {
        Self {
            id: value.id.to_string(),
            user_id: value.user_id.as_ref().map(ToString::to_string),
            generated_on: value.generated_on,
            name: value.name.clone(),
            weeks: value.weeks.iter().map(Week::from).collect(),
        }
    }
}

impl From<WorkoutPlan> for domain::WorkoutPlan {
    fn from(value: WorkoutPlan) -> Self {
        Self {
            id: value.id.into(),
            user_id: value.user_id.map(domain::UserID::from),
            generated_on: value.generated_on,
            name: value.name,
            weeks: value.weeks.into_iter().map(domain::Week::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub days: Vec<Day>,
}

impl From<&domain::Week> for Week {
    fn from(value: &domain::Week) -> Self {
        Self {
            week_number: value.week_number,
            days: value.days.iter().map(Day::from).collect(),
        }
    }
}

impl From<Week> for domain::Week {
    fn from(value: Week) -> Self {
        Self {
            week_number: value.week_number,
            days: value.days.into_iter().map(domain::Day::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub day_number: u32,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
}

impl From<&domain::Day> for Day {
    fn from(value: &domain::Day) -> Self {
        Self {
            day_number: value.day_number,
            name: value.name.clone(),
            exercises: value.exercises.iter().map(PlannedExercise::from).collect(),
        }
    }
}

impl From<Day> for domain::Day {
    fn from(value: Day) -> Self {
        Self {
            day_number: value.day_number,
            name: value.name,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::PlannedExercise::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_or_intensity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::PlannedExercise> for PlannedExercise {
    fn from(value: &domain::PlannedExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.clone(),
            name: value.name.clone(),
            muscle_group: value.muscle_group.clone(),
            sets: value.sets,
            reps: value.reps,
            rest_seconds: value.rest_seconds,
            weight_or_intensity: value.weight_or_intensity.clone(),
            notes: value.notes.clone(),
        }
    }
}

impl From<PlannedExercise> for domain::PlannedExercise {
    fn from(value: PlannedExercise) -> Self {
        Self {
            exercise_id: value.exercise_id,
            name: value.name,
            muscle_group: value.muscle_group,
            sets: value.sets,
            reps: value.reps,
            rest_seconds: value.rest_seconds,
            weight_or_intensity: value.weight_or_intensity,
            notes: value.notes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgress {
    pub id: String,
    pub plan_id: String,
    pub date: DateTime<Utc>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

impl From<&domain::WorkoutProgressRecord> for WorkoutProgress {
    fn from(value: &domain::WorkoutProgressRecord) -> Self {
        Self {
            id: value.id.to_string(),
            plan_id: value.plan_id.to_string(),
            date: value.date,
            completed: value.completed,
            notes: value.notes.clone(),
            calories: value.calories,
        }
    }
}

impl From<WorkoutProgress> for domain::WorkoutProgressRecord {
    fn from(value: WorkoutProgress) -> Self {
        Self {
            id: value.id.into(),
            plan_id: value.plan_id.into(),
            date: value.date,
            completed: value.completed,
            notes: value.notes,
            calories: value.calories,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub height_cm: f32,
    pub weight_kg: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f32>,
    #[serde(rename = "restingHR", default, skip_serializing_if = "Option::is_none")]
    pub resting_hr: Option<u32>,
    pub activity_level: ActivityLevel,
    pub goals: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injury_history: Option<String>,
}

impl From<&domain::UserProfile> for UserProfile {
    fn from(value: &domain::UserProfile) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            email: value.email.clone(),
            gender: value.gender.into(),
            date_of_birth: value.date_of_birth,
            height_cm: value.height_cm,
            weight_kg: value.weight_kg,
            body_fat_pct: value.body_fat_pct,
            resting_hr: value.resting_hr,
            activity_level: value.activity_level.into(),
            goals: value.goals.clone(),
            injury_history: value.injury_history.clone(),
        }
    }
}

impl From<UserProfile> for domain::UserProfile {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            email: value.email,
            gender: value.gender.into(),
            date_of_birth: value.date_of_birth,
            height_cm: value.height_cm,
            weight_kg: value.weight_kg,
            body_fat_pct: value.body_fat_pct,
            resting_hr: value.resting_hr,
            activity_level: value.activity_level.into(),
            goals: value.goals,
            injury_history: value.injury_history,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl From<domain::Gender> for Gender {
    fn from(value: domain::Gender) -> Self {
        match value {
            domain::Gender::Male => Gender::Male,
            domain::Gender::Female => Gender::Female,
            domain::Gender::Other => Gender::Other,
        }
    }
}

impl From<Gender> for domain::Gender {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Male => domain::Gender::Male,
            Gender::Female => domain::Gender::Female,
            Gender::Other => domain::Gender::Other,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl From<domain::ActivityLevel> for ActivityLevel {
    fn from(value: domain::ActivityLevel) -> Self {
        match value {
            domain::ActivityLevel::Sedentary => ActivityLevel::Sedentary,
            domain::ActivityLevel::LightlyActive => ActivityLevel::LightlyActive,
            domain::ActivityLevel::ModeratelyActive => ActivityLevel::ModeratelyActive,
            domain::ActivityLevel::VeryActive => ActivityLevel::VeryActive,
            domain::ActivityLevel::ExtremelyActive => ActivityLevel::ExtremelyActive,
        }
    }
}

impl From<ActivityLevel> for domain::ActivityLevel {
    fn from(value: ActivityLevel) -> Self {
        match value {
            ActivityLevel::Sedentary => domain::ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive => domain::ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive => domain::ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive => domain::ActivityLevel::VeryActive,
            ActivityLevel::ExtremelyActive => domain::ActivityLevel::ExtremelyActive,
        }
    }
}

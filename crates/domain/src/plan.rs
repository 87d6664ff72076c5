use std::collections::HashSet;

use chrono::{DateTime, Utc};
use derive_more::{Deref, Display};

use crate::{ExerciseDefinition, UserID};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub id: PlanID,
    pub user_id: Option<UserID>,
    pub generated_on: DateTime<Utc>,
    pub name: String,
    pub weeks: Vec<Week>,
}

impl WorkoutPlan {
    /// Renderers rely on the first week for the weekly overview, so a plan
    /// without a complete first week is treated as unrenderable.
    pub fn first_week(&self) -> Result<&Week, MalformedPlanError> {
        let Some(week) = self.weeks.first() else {
            return Err(MalformedPlanError::MissingFirstWeek(self.id.clone()));
        };
        if week.days.len() != DAYS_PER_WEEK {
            return Err(MalformedPlanError::InvalidDayCount {
                plan_id: self.id.clone(),
                week_number: week.week_number,
                days: week.days.len(),
            });
        }
        Ok(week)
    }

    #[must_use]
    pub fn total_exercises(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|w| &w.days)
            .map(|d| d.exercises.len())
            .sum()
    }

    /// Number of distinct training days in the first week.
    pub fn training_days_per_week(&self) -> Result<usize, MalformedPlanError> {
        Ok(self
            .first_week()?
            .days
            .iter()
            .filter(|d| !d.is_rest_day())
            .map(|d| d.name.as_str())
            .collect::<HashSet<_>>()
            .len())
    }
}

#[derive(Deref, Display, Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanID(String);

impl PlanID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for PlanID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PlanID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub week_number: u32,
    pub days: Vec<Day>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub day_number: u32,
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
}

impl Day {
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedExercise {
    pub exercise_id: String,
    pub name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    pub weight_or_intensity: Option<String>,
    pub notes: Option<String>,
}

impl PlannedExercise {
    #[must_use]
    pub fn new(exercise: &ExerciseDefinition, sets: u32, reps: u32, rest_seconds: u32) -> Self {
        Self {
            exercise_id: exercise.id.to_string(),
            name: exercise.name.to_string(),
            muscle_group: exercise.muscle_group.to_string(),
            sets,
            reps,
            rest_seconds,
            weight_or_intensity: None,
            notes: None,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedPlanError {
    #[error("workout plan {0} has no weeks")]
    MissingFirstWeek(PlanID),
    #[error("week {week_number} of workout plan {plan_id} has {days} days instead of 7")]
    InvalidDayCount {
        plan_id: PlanID,
        week_number: u32,
        days: usize,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::catalog;

    fn day(day_number: u32, name: &str, exercise_ids: &[&str]) -> Day {
        Day {
            day_number,
            name: name.to_string(),
            exercises: exercise_ids
                .iter()
                .map(|id| PlannedExercise::new(catalog::exercise(id).unwrap(), 3, 10, 60))
                .collect(),
        }
    }

    fn plan(weeks: Vec<Week>) -> WorkoutPlan {
        WorkoutPlan {
            id: "plan-1".into(),
            user_id: Some("user1".into()),
            generated_on: DateTime::UNIX_EPOCH,
            name: "Plan".to_string(),
            weeks,
        }
    }

    fn week() -> Week {
        Week {
            week_number: 1,
            days: vec![
                day(1, "Push Day", &["ex002", "ex005"]),
                day(2, "Pull Day", &["ex003"]),
                day(3, "Rest Day", &[]),
                day(4, "Push Day", &["ex002"]),
                day(5, "Legs Day", &["ex001", "ex007", "ex011"]),
                day(6, "Rest Day", &[]),
                day(7, "Rest Day", &[]),
            ],
        }
    }

    #[test]
    fn test_planned_exercise_new() {
        assert_eq!(
            PlannedExercise::new(catalog::exercise("ex004").unwrap(), 4, 8, 90),
            PlannedExercise {
                exercise_id: "ex004".to_string(),
                name: "Pull-up".to_string(),
                muscle_group: "Back".to_string(),
                sets: 4,
                reps: 8,
                rest_seconds: 90,
                weight_or_intensity: None,
                notes: None,
            }
        );
    }

    #[test]
    fn test_workout_plan_first_week() {
        let plan = plan(vec![week()]);
        assert_eq!(plan.first_week(), Ok(&plan.weeks[0]));
    }

    #[test]
    fn test_workout_plan_first_week_missing() {
        assert_eq!(
            plan(vec![]).first_week(),
            Err(MalformedPlanError::MissingFirstWeek("plan-1".into()))
        );
    }

    #[test]
    fn test_workout_plan_first_week_incomplete() {
        let mut week = week();
        week.days.truncate(3);
        assert_eq!(
            plan(vec![week]).first_week(),
            Err(MalformedPlanError::InvalidDayCount {
                plan_id: "plan-1".into(),
                week_number: 1,
                days: 3
            })
        );
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![week()], 7)]
    #[case(vec![week(), week()], 14)]
    fn test_workout_plan_total_exercises(#[case] weeks: Vec<Week>, #[case] expected: usize) {
        assert_eq!(plan(weeks).total_exercises(), expected);
    }

    #[test]
    fn test_workout_plan_training_days_per_week() {
        assert_eq!(plan(vec![week()]).training_days_per_week(), Ok(3));
        assert!(plan(vec![]).training_days_per_week().is_err());
    }

    #[rstest]
    #[case("", true)]
    #[case("template-full-body", false)]
    fn test_plan_id_is_empty(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(PlanID::from(id).is_empty(), expected);
    }
}

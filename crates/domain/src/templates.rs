use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use log::error;

use crate::{Day, PlanID, PlannedExercise, Week, WorkoutPlan, catalog};

pub const FULL_BODY: &str = "template-full-body";
pub const UPPER_LOWER: &str = "template-upper-lower";
pub const PUSH_PULL_LEGS: &str = "template-push-pull-legs";
pub const UPPER_BODY: &str = "template-upper-body";
pub const CORE_FUNCTIONAL: &str = "template-core-functional";

/// Source of the plans used as seeds for generation.
pub trait TemplateRepository {
    fn templates(&self) -> &[WorkoutPlan];

    fn template(&self, id: &str) -> Option<&WorkoutPlan> {
        self.templates().iter().find(|t| *t.id == id)
    }

    /// Map the preferred number of training days to a template.
    ///
    /// Every input is mapped, values outside of 2 to 7 fall back to the full
    /// body template. `None` is only returned if the mapped template is
    /// missing.
    fn select_by_days_per_week(&self, days: i64) -> Option<&WorkoutPlan> {
        self.template(match days {
            4 => UPPER_LOWER,
            5 => UPPER_BODY,
            6 | 7 => PUSH_PULL_LEGS,
            _ => FULL_BODY,
        })
    }
}

/// The built-in template library.
#[derive(Debug, Default, Clone, Copy)]
pub struct Templates;

impl TemplateRepository for Templates {
    fn templates(&self) -> &[WorkoutPlan] {
        templates()
    }
}

#[must_use]
pub fn templates() -> &'static [WorkoutPlan] {
    &TEMPLATES
}

#[must_use]
pub fn template(id: &str) -> Option<&'static WorkoutPlan> {
    TEMPLATES.iter().find(|t| *t.id == id)
}

static TEMPLATES: LazyLock<Vec<WorkoutPlan>> = LazyLock::new(|| {
    let generated_on = Utc::now();
    TEMPLATE_DEFINITIONS
        .iter()
        .map(|t| t.to_workout_plan(generated_on))
        .collect()
});

struct TemplateDefinition {
    id: &'static str,
    name: &'static str,
    days: [(&'static str, &'static [Prescription]); 7],
}

impl TemplateDefinition {
    fn to_workout_plan(&self, generated_on: DateTime<Utc>) -> WorkoutPlan {
        WorkoutPlan {
            id: PlanID::from(self.id),
            user_id: None,
            generated_on,
            name: self.name.to_string(),
            weeks: vec![Week {
                week_number: 1,
                days: self
                    .days
                    .iter()
                    .zip(1..)
                    .map(|((name, prescriptions), day_number)| Day {
                        day_number,
                        name: (*name).to_string(),
                        exercises: prescriptions
                            .iter()
                            .filter_map(|p| p.to_planned_exercise(self.id))
                            .collect(),
                    })
                    .collect(),
            }],
        }
    }
}

#[derive(Clone, Copy)]
struct Prescription {
    exercise_id: &'static str,
    sets: u32,
    reps: u32,
    rest_seconds: u32,
    weight_or_intensity: Option<&'static str>,
    notes: Option<&'static str>,
}

impl Prescription {
    const fn new(exercise_id: &'static str, sets: u32, reps: u32, rest_seconds: u32) -> Self {
        Self {
            exercise_id,
            sets,
            reps,
            rest_seconds,
            weight_or_intensity: None,
            notes: None,
        }
    }

    const fn intensity(mut self, weight_or_intensity: &'static str) -> Self {
        self.weight_or_intensity = Some(weight_or_intensity);
        self
    }

    const fn notes(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }

    fn to_planned_exercise(self, template_id: &str) -> Option<PlannedExercise> {
        let Some(exercise) = catalog::exercise(self.exercise_id) else {
            error!(
                "template {template_id} references unknown exercise {}",
                self.exercise_id
            );
            return None;
        };
        Some(PlannedExercise {
            weight_or_intensity: self.weight_or_intensity.map(str::to_string),
            notes: self.notes.map(str::to_string),
            ..PlannedExercise::new(exercise, self.sets, self.reps, self.rest_seconds)
        })
    }
}

static TEMPLATE_DEFINITIONS: [TemplateDefinition; 5] = [
    TemplateDefinition {
        id: "template-full-body",
        name: "Full Body Workout Plan",
        days: [
            (
                "Full Body A",
                &[
                    Prescription::new("ex001", 3, 10, 90)
                        .intensity("Moderate weight")
                        .notes("Focus on form"),
                    Prescription::new("ex002", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex003", 3, 8, 120)
                        .intensity("Moderate weight")
                        .notes("Keep back straight"),
                    Prescription::new("ex008", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex017", 3, 30, 60).intensity("Hold for 30 seconds"),
                ],
            ),
            ("Rest Day", &[]),
            (
                "Full Body B",
                &[
                    Prescription::new("ex004", 3, 8, 90).intensity("Bodyweight"),
                    Prescription::new("ex005", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex007", 3, 12, 90).intensity("Moderate weight"),
                    Prescription::new("ex009", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex018", 3, 15, 60).intensity("Each side"),
                ],
            ),
            ("Rest Day", &[]),
            (
                "Full Body C",
                &[
                    Prescription::new("ex006", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex013", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex011", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex010", 3, 15, 60).intensity("Light weight"),
                    Prescription::new("ex019", 3, 15, 60).intensity("Bodyweight"),
                ],
            ),
            ("Rest Day", &[]),
            ("Rest Day", &[]),
        ],
    },
    TemplateDefinition {
        id: "template-upper-lower",
        name: "Upper/Lower Split",
        days: [
            (
                "Upper Body A",
                &[
                    Prescription::new("ex002", 4, 8, 90).intensity("Moderate to heavy weight"),
                    Prescription::new("ex004", 4, 8, 90).intensity("Bodyweight"),
                    Prescription::new("ex005", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex008", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex009", 3, 12, 60).intensity("Light to moderate weight"),
                ],
            ),
            (
                "Lower Body A",
                &[
                    Prescription::new("ex001", 4, 8, 120).intensity("Moderate to heavy weight"),
                    Prescription::new("ex011", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex007", 3, 12, 90).intensity("Moderate to heavy weight"),
                    Prescription::new("ex015", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex012", 4, 15, 60).intensity("Moderate weight"),
                ],
            ),
            ("Rest Day", &[]),
            (
                "Upper Body B",
                &[
                    Prescription::new("ex013", 4, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex006", 4, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex014", 3, 15, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex016", 3, 10, 60).intensity("Moderate weight"),
                    Prescription::new("ex010", 3, 15, 60).intensity("Light weight"),
                ],
            ),
            (
                "Lower Body B",
                &[
                    Prescription::new("ex003", 4, 8, 120).intensity("Moderate to heavy weight"),
                    Prescription::new("ex020", 3, 10, 90)
                        .intensity("Moderate weight")
                        .notes("Each leg"),
                    Prescription::new("ex007", 3, 12, 90)
                        .intensity("Different foot position from day 2"),
                    Prescription::new("ex012", 4, 15, 60).intensity("Moderate weight"),
                    Prescription::new("ex017", 3, 30, 60).intensity("Hold for 30 seconds"),
                ],
            ),
            ("Rest Day", &[]),
            ("Rest Day", &[]),
        ],
    },
    TemplateDefinition {
        id: "template-push-pull-legs",
        name: "Push/Pull/Legs Split",
        days: [
            (
                "Push Day",
                &[
                    Prescription::new("ex002", 4, 8, 90).intensity("Moderate to heavy weight"),
                    Prescription::new("ex005", 4, 8, 90).intensity("Moderate weight"),
                    Prescription::new("ex013", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex009", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex019", 3, 15, 60)
                        .intensity("Bodyweight")
                        .notes("To failure"),
                ],
            ),
            (
                "Pull Day",
                &[
                    Prescription::new("ex003", 4, 8, 120).intensity("Moderate to heavy weight"),
                    Prescription::new("ex004", 4, 8, 90).intensity("Bodyweight"),
                    Prescription::new("ex006", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex008", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex014", 3, 15, 60).intensity("Light weight"),
                ],
            ),
            (
                "Legs Day",
                &[
                    Prescription::new("ex001", 4, 8, 120).intensity("Moderate to heavy weight"),
                    Prescription::new("ex007", 4, 10, 90).intensity("Moderate to heavy weight"),
                    Prescription::new("ex011", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex015", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex012", 4, 15, 60).intensity("Moderate weight"),
                ],
            ),
            (
                "Push Day",
                &[
                    Prescription::new("ex002", 4, 10, 90)
                        .intensity("Moderate weight")
                        .notes("Different grip than day 1"),
                    Prescription::new("ex005", 4, 10, 90)
                        .intensity("Moderate weight")
                        .notes("Different grip than day 1"),
                    Prescription::new("ex010", 3, 15, 60).intensity("Light weight"),
                    Prescription::new("ex009", 3, 15, 60)
                        .intensity("Light weight")
                        .notes("Different attachment than day 1"),
                    Prescription::new("ex019", 3, 12, 60).intensity("Bodyweight with elevated feet"),
                ],
            ),
            (
                "Pull Day",
                &[
                    Prescription::new("ex016", 4, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex004", 4, 10, 90)
                        .intensity("Bodyweight")
                        .notes("Different grip than day 2"),
                    Prescription::new("ex006", 3, 12, 90)
                        .intensity("Moderate weight")
                        .notes("Different grip than day 2"),
                    Prescription::new("ex008", 3, 15, 60)
                        .intensity("Light weight")
                        .notes("Different curl variation"),
                    Prescription::new("ex018", 3, 15, 60).intensity("With weight plate"),
                ],
            ),
            (
                "Legs Day",
                &[
                    Prescription::new("ex020", 4, 10, 90)
                        .intensity("Moderate weight")
                        .notes("Each leg"),
                    Prescription::new("ex007", 4, 12, 90)
                        .intensity("Moderate weight")
                        .notes("Different foot position than day 3"),
                    Prescription::new("ex011", 3, 12, 90)
                        .intensity("Moderate weight")
                        .notes("Single leg"),
                    Prescription::new("ex015", 3, 15, 60)
                        .intensity("Light weight")
                        .notes("Single leg"),
                    Prescription::new("ex012", 4, 20, 60)
                        .intensity("Moderate weight")
                        .notes("Single leg"),
                ],
            ),
            ("Rest Day", &[]),
        ],
    },
    TemplateDefinition {
        id: "template-upper-body",
        name: "Upper Body Focus",
        days: [
            (
                "Chest & Triceps",
                &[
                    Prescription::new("ex002", 4, 8, 90).intensity("Moderate to heavy weight"),
                    Prescription::new("ex013", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex019", 3, 15, 60).intensity("Bodyweight"),
                    Prescription::new("ex009", 4, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex017", 3, 30, 60).intensity("Hold for 30 seconds"),
                ],
            ),
            (
                "Back & Biceps",
                &[
                    Prescription::new("ex004", 4, 8, 90).intensity("Bodyweight"),
                    Prescription::new("ex006", 4, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex016", 3, 10, 60).intensity("Moderate weight"),
                    Prescription::new("ex008", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex018", 3, 15, 60).intensity("Each side"),
                ],
            ),
            ("Rest Day", &[]),
            (
                "Shoulders & Arms",
                &[
                    Prescription::new("ex005", 4, 8, 90).intensity("Moderate weight"),
                    Prescription::new("ex010", 3, 15, 60).intensity("Light weight"),
                    Prescription::new("ex014", 3, 15, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex008", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex009", 3, 12, 60).intensity("Light to moderate weight"),
                ],
            ),
            (
                "Lower Body",
                &[
                    Prescription::new("ex001", 4, 8, 120).intensity("Moderate to heavy weight"),
                    Prescription::new("ex011", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex015", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex020", 3, 10, 90)
                        .intensity("Moderate weight")
                        .notes("Each leg"),
                    Prescription::new("ex012", 4, 15, 60).intensity("Moderate weight"),
                ],
            ),
            ("Rest Day", &[]),
            ("Rest Day", &[]),
        ],
    },
    TemplateDefinition {
        id: "template-core-functional",
        name: "Core & Functional Training",
        days: [
            (
                "Functional Full Body",
                &[
                    Prescription::new("ex001", 3, 12, 60).intensity("Moderate weight"),
                    Prescription::new("ex019", 3, 15, 60).intensity("Bodyweight"),
                    Prescription::new("ex017", 3, 30, 60).intensity("Hold for 30 seconds"),
                    Prescription::new("ex020", 3, 12, 60).intensity("Bodyweight").notes("Each leg"),
                    Prescription::new("ex018", 3, 15, 60).intensity("Each side"),
                ],
            ),
            ("Rest Day", &[]),
            (
                "Core Strength",
                &[
                    Prescription::new("ex017", 4, 45, 60).intensity("Hold for 45 seconds"),
                    Prescription::new("ex018", 4, 20, 60).intensity("Each side"),
                    Prescription::new("ex004", 3, 8, 60).intensity("Bodyweight"),
                    Prescription::new("ex003", 3, 10, 90).intensity("Moderate weight"),
                    Prescription::new("ex019", 3, 15, 60).intensity("Bodyweight"),
                ],
            ),
            ("Rest Day", &[]),
            (
                "Functional Strength",
                &[
                    Prescription::new("ex020", 3, 12, 60)
                        .intensity("With dumbbells")
                        .notes("Each leg"),
                    Prescription::new("ex011", 3, 12, 60).intensity("Light to moderate weight"),
                    Prescription::new("ex005", 3, 10, 60).intensity("Moderate weight"),
                    Prescription::new("ex010", 3, 15, 60).intensity("Light weight"),
                    Prescription::new("ex017", 3, 30, 30)
                        .intensity("Three different plank variations"),
                ],
            ),
            ("Rest Day", &[]),
            ("Rest Day", &[]),
        ],
    },
];

use fitai_domain::{ExerciseDefinition, catalog::NO_EQUIPMENT};

/// Filter state of the exercise library.
///
/// Empty fields match everything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn matches(&self, exercise: &ExerciseDefinition) -> bool {
        self.matches_search(exercise)
            && self
                .muscle_group
                .as_ref()
                .is_none_or(|m| *m == exercise.muscle_group)
            && self
                .equipment
                .as_ref()
                .is_none_or(|e| exercise.equipment.iter().any(|x| *x == e.as_str()))
    }

    #[must_use]
    pub fn apply<'a>(&self, exercises: &'a [ExerciseDefinition]) -> Vec<&'a ExerciseDefinition> {
        exercises.iter().filter(|e| self.matches(e)).collect()
    }

    fn matches_search(&self, exercise: &ExerciseDefinition) -> bool {
        let search = self.search.trim().to_lowercase();
        search.is_empty()
            || [exercise.name, exercise.muscle_group, exercise.description]
                .iter()
                .any(|text| text.to_lowercase().contains(&search))
    }
}

/// Distinct muscle groups in order of first appearance.
#[must_use]
pub fn muscle_groups(exercises: &[ExerciseDefinition]) -> Vec<&'static str> {
    let mut groups: Vec<&'static str> = vec![];
    for exercise in exercises {
        if !groups.contains(&exercise.muscle_group) {
            groups.push(exercise.muscle_group);
        }
    }
    groups
}

/// Distinct equipment in order of first appearance, without the "None" tag.
#[must_use]
pub fn equipment_types(exercises: &[ExerciseDefinition]) -> Vec<&'static str> {
    let mut types: Vec<&'static str> = vec![];
    for equipment in exercises.iter().flat_map(|e| e.equipment) {
        if *equipment != NO_EQUIPMENT && !types.contains(equipment) {
            types.push(*equipment);
        }
    }
    types
}

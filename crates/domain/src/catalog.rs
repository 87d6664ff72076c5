#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_group: &'static str,
    /// `"None"` marks an exercise that needs no equipment.
    pub equipment: &'static [&'static str],
    pub description: &'static str,
    pub demo_video_url: Option<&'static str>,
    pub image_url: Option<&'static str>,
}

impl ExerciseDefinition {
    #[must_use]
    pub fn needs_equipment(&self) -> bool {
        self.equipment.iter().any(|e| *e != NO_EQUIPMENT)
    }
}

pub const NO_EQUIPMENT: &str = "None";

#[must_use]
pub fn exercises() -> &'static [ExerciseDefinition] {
    &EXERCISES
}

#[must_use]
pub fn exercise(id: &str) -> Option<&'static ExerciseDefinition> {
    EXERCISES.iter().find(|e| e.id == id)
}

static EXERCISES: [ExerciseDefinition; 20] = [
    ExerciseDefinition {
        id: "ex001",
        name: "Barbell Back Squat",
        muscle_group: "Quadriceps",
        equipment: &["Barbell", "Squat Rack"],
        description: "A compound exercise that targets the quadriceps, hamstrings, and glutes. Position the barbell on your upper back, squat down until your thighs are parallel to the ground, then stand back up.",
        demo_video_url: Some("https://www.youtube.com/watch?v=bEv6CCg2BC8"),
        image_url: Some("https://images.unsplash.com/photo-1574680178050-55c6a6a96e0a?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex002",
        name: "Bench Press",
        muscle_group: "Chest",
        equipment: &["Barbell", "Bench"],
        description: "Lie on a bench with your feet on the ground. Lower the barbell to your chest, then push it back up until your arms are extended.",
        demo_video_url: Some("https://www.youtube.com/watch?v=rT7DgCr-3pg"),
        image_url: Some("https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex003",
        name: "Deadlift",
        muscle_group: "Back",
        equipment: &["Barbell"],
        description: "A compound exercise that targets the back, hamstrings, and glutes. Bend at the hips and knees to lower your hands to the bar, then stand up straight while holding the bar.",
        demo_video_url: Some("https://www.youtube.com/watch?v=op9kVnSso6Q"),
        image_url: Some("https://images.unsplash.com/photo-1517963879433-6ad2b056d712?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex004",
        name: "Pull-up",
        muscle_group: "Back",
        equipment: &["Pull-up Bar"],
        description: "Hang from a bar with your palms facing away from you. Pull yourself up until your chin is over the bar, then lower yourself back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=eGo4IYlbE5g"),
        image_url: Some("https://images.unsplash.com/photo-1598971639058-a4575d867024?ixlib=rb-1.2.1&auto=format&fit=crop&w=1055&q=80"),
    },
    ExerciseDefinition {
        id: "ex005",
        name: "Overhead Press",
        muscle_group: "Shoulders",
        equipment: &["Barbell"],
        description: "Stand with your feet shoulder-width apart. Press the barbell from your shoulders until your arms are fully extended overhead.",
        demo_video_url: Some("https://www.youtube.com/watch?v=2yjwXTZQDDI"),
        image_url: Some("https://images.unsplash.com/photo-1583454110551-21f2fa2afe61?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex006",
        name: "Barbell Row",
        muscle_group: "Back",
        equipment: &["Barbell"],
        description: "Bend over with a barbell in your hands. Pull the barbell up to your lower chest, then lower it back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=FWJR5Ve8bnQ"),
        image_url: Some("https://images.unsplash.com/photo-1603287681836-b174ce5074c2?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex007",
        name: "Leg Press",
        muscle_group: "Quadriceps",
        equipment: &["Leg Press Machine"],
        description: "Sit on the leg press machine with your back against the pad. Push the platform away with your feet, then slowly lower it back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=IZxyjW7MPJQ"),
        image_url: Some("https://images.unsplash.com/photo-1517838277536-f5f99be501cd?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex008",
        name: "Dumbbell Curl",
        muscle_group: "Biceps",
        equipment: &["Dumbbells"],
        description: "Hold a dumbbell in each hand with your arms extended. Curl the dumbbells up to your shoulders, then lower them back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=ykJmrZ5v0Oo"),
        image_url: Some("https://images.unsplash.com/photo-1581009146145-b5ef050c2e1e?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex009",
        name: "Tricep Pushdown",
        muscle_group: "Triceps",
        equipment: &["Cable Machine"],
        description: "Stand facing a cable machine with a rope attachment. Push the rope down until your arms are fully extended, then slowly raise it back up.",
        demo_video_url: Some("https://www.youtube.com/watch?v=2-LAMcpzODU"),
        image_url: Some("https://images.unsplash.com/photo-1530822847156-5df684ec5ee3?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex010",
        name: "Lateral Raise",
        muscle_group: "Shoulders",
        equipment: &["Dumbbells"],
        description: "Stand with a dumbbell in each hand. Raise the dumbbells to the sides until they reach shoulder height, then lower them back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=3VcKaXpzqRo"),
        image_url: Some("https://images.unsplash.com/photo-1541534741688-6078c6bfb5c5?ixlib=rb-1.2.1&auto=format&fit=crop&w=1049&q=80"),
    },
    ExerciseDefinition {
        id: "ex011",
        name: "Romanian Deadlift",
        muscle_group: "Hamstrings",
        equipment: &["Barbell"],
        description: "Hold a barbell at hip level. Keeping your back straight, bend at the hips to lower the bar, then return to the starting position.",
        demo_video_url: Some("https://www.youtube.com/watch?v=jEy_czb3RKA"),
        image_url: Some("https://images.unsplash.com/photo-1603287681836-b174ce5074c2?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex012",
        name: "Calf Raise",
        muscle_group: "Calves",
        equipment: &["Smith Machine", "Block"],
        description: "Stand on a block with the balls of your feet. Raise your heels as high as possible, then lower them back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=gwLzBJYoWlI"),
        image_url: Some("https://images.unsplash.com/photo-1434608519344-49d77a699e1d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex013",
        name: "Cable Fly",
        muscle_group: "Chest",
        equipment: &["Cable Machine"],
        description: "Stand between two cable stations with the pulleys set at chest height. Pull the handles forward and together in a hugging motion.",
        demo_video_url: Some("https://www.youtube.com/watch?v=Iwe6AmxVf7o"),
        image_url: Some("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex014",
        name: "Face Pull",
        muscle_group: "Shoulders",
        equipment: &["Cable Machine", "Rope Attachment"],
        description: "Stand facing a cable machine with a rope attachment. Pull the rope towards your face while keeping your upper arms parallel to the ground.",
        demo_video_url: Some("https://www.youtube.com/watch?v=rep-qVOkqgk"),
        image_url: Some("https://images.unsplash.com/photo-1541534741688-6078c6bfb5c5?ixlib=rb-1.2.1&auto=format&fit=crop&w=1049&q=80"),
    },
    ExerciseDefinition {
        id: "ex015",
        name: "Leg Curl",
        muscle_group: "Hamstrings",
        equipment: &["Leg Curl Machine"],
        description: "Lie face down on a leg curl machine. Curl your legs up as far as possible, then lower them back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=1Tq3QdYUuHs"),
        image_url: Some("https://images.unsplash.com/photo-1434608519344-49d77a699e1d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex016",
        name: "Dumbbell Row",
        muscle_group: "Back",
        equipment: &["Dumbbell", "Bench"],
        description: "Place one knee and hand on a bench, with the other foot on the floor. Pull the dumbbell up to your hip, then lower it back down.",
        demo_video_url: Some("https://www.youtube.com/watch?v=roCP6wCXPqo"),
        image_url: Some("https://images.unsplash.com/photo-1603287681836-b174ce5074c2?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex017",
        name: "Plank",
        muscle_group: "Core",
        equipment: &["None"],
        description: "Get into a push-up position, but rest on your forearms instead of your hands. Keep your body in a straight line from head to heels.",
        demo_video_url: Some("https://www.youtube.com/watch?v=pSHjTRCQxIw"),
        image_url: Some("https://images.unsplash.com/photo-1566241134883-13eb2393a3cc?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex018",
        name: "Russian Twist",
        muscle_group: "Core",
        equipment: &["Weight Plate", "None"],
        description: "Sit on the floor with your knees bent and feet elevated. Twist your torso from side to side.",
        demo_video_url: Some("https://www.youtube.com/watch?v=wkD8rjkodUI"),
        image_url: Some("https://images.unsplash.com/photo-1567598508481-65a7a5553012?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
    ExerciseDefinition {
        id: "ex019",
        name: "Push-up",
        muscle_group: "Chest",
        equipment: &["None"],
        description: "Start in a plank position with your hands shoulder-width apart. Lower your body until your chest nearly touches the floor, then push yourself back up.",
        demo_video_url: Some("https://www.youtube.com/watch?v=IODxDxX7oi4"),
        image_url: Some("https://images.unsplash.com/photo-1598971639058-a4575d867024?ixlib=rb-1.2.1&auto=format&fit=crop&w=1055&q=80"),
    },
    ExerciseDefinition {
        id: "ex020",
        name: "Lunge",
        muscle_group: "Quadriceps",
        equipment: &["None", "Dumbbells"],
        description: "Step forward with one leg and lower your hips until both knees are bent at about 90 degrees. Return to the starting position and repeat with the other leg.",
        demo_video_url: Some("https://www.youtube.com/watch?v=QOVaHwm-Q6U"),
        image_url: Some("https://images.unsplash.com/photo-1434608519344-49d77a699e1d?ixlib=rb-1.2.1&auto=format&fit=crop&w=1050&q=80"),
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_exercises() {
        let ids = exercises().iter().map(|e| e.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), exercises().len());

        for exercise in exercises() {
            assert!(exercise.id.starts_with("ex"));
            assert!(!exercise.name.is_empty());
            assert!(!exercise.muscle_group.is_empty());
            assert!(!exercise.equipment.is_empty());
            assert!(!exercise.description.is_empty());
            if exercise.name.contains("Barbell") {
                assert!(exercise.equipment.contains(&"Barbell"));
            }
            if exercise.name.contains("Dumbbell") {
                assert!(
                    exercise.equipment.contains(&"Dumbbell")
                        || exercise.equipment.contains(&"Dumbbells")
                );
            }
        }
    }

    #[rstest]
    #[case("ex001", Some("Barbell Back Squat"))]
    #[case("ex017", Some("Plank"))]
    #[case("ex020", Some("Lunge"))]
    #[case("ex021", None)]
    #[case("", None)]
    fn test_exercise(#[case] id: &str, #[case] expected: Option<&str>) {
        assert_eq!(exercise(id).map(|e| e.name), expected);
    }

    #[rstest]
    #[case("ex017", false)]
    #[case("ex018", true)]
    #[case("ex020", true)]
    #[case("ex001", true)]
    fn test_exercise_needs_equipment(#[case] id: &str, #[case] expected: bool) {
        assert_eq!(exercise(id).unwrap().needs_equipment(), expected);
    }
}

use chrono::{DateTime, Duration, Utc};
use derive_more::{Deref, Display};

use crate::PlanID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutProgressRecord {
    pub id: ProgressID,
    pub plan_id: PlanID,
    pub date: DateTime<Utc>,
    pub completed: bool,
    pub notes: Option<String>,
    pub calories: Option<u32>,
}

#[derive(Deref, Display, Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProgressID(String);

impl From<String> for ProgressID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProgressID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    pub total_calories: u64,
    pub workouts_this_week: usize,
}

impl WorkoutStats {
    /// A record counts for the current week if it is at most seven days older
    /// than `now`.
    #[must_use]
    pub fn from_records(records: &[WorkoutProgressRecord], now: DateTime<Utc>) -> Self {
        let week_ago = now - Duration::days(7);
        Self {
            total_workouts: records.len(),
            total_calories: records
                .iter()
                .map(|r| u64::from(r.calories.unwrap_or(0)))
                .sum(),
            workouts_this_week: records.iter().filter(|r| r.date >= week_ago).count(),
        }
    }
}

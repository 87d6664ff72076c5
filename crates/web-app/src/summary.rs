use chrono::{DateTime, Datelike, Utc};
use fitai_domain::{MalformedPlanError, PlanID, WorkoutPlan};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;
const MINUTES_PER_MONTH: i64 = 43_200;

/// Key figures shown on a plan card in the workout history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub id: PlanID,
    pub name: String,
    pub generated_on: DateTime<Utc>,
    pub weeks: usize,
    pub training_days: usize,
    pub total_exercises: usize,
}

impl PlanSummary {
    /// Age of the plan in words, e.g. "about 2 hours ago".
    #[must_use]
    pub fn generated_ago(&self, now: DateTime<Utc>) -> String {
        format!("{} ago", distance(self.generated_on, now))
    }
}

impl TryFrom<&WorkoutPlan> for PlanSummary {
    type Error = MalformedPlanError;

    fn try_from(plan: &WorkoutPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            generated_on: plan.generated_on,
            weeks: plan.weeks.len(),
            training_days: plan.training_days_per_week()?,
            total_exercises: plan.total_exercises(),
        })
    }
}

fn distance(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = (to - from).num_seconds().max(0);
    let minutes = rounded_div(seconds, 60);

    match minutes {
        0 => "less than a minute".to_string(),
        1 => "1 minute".to_string(),
        2..45 => format!("{minutes} minutes"),
        45..90 => "about 1 hour".to_string(),
        90..MINUTES_PER_DAY => format!("about {} hours", rounded_div(minutes, MINUTES_PER_HOUR)),
        MINUTES_PER_DAY..2520 => "1 day".to_string(),
        2520..MINUTES_PER_MONTH => format!("{} days", rounded_div(minutes, MINUTES_PER_DAY)),
        MINUTES_PER_MONTH..64_800 => "about 1 month".to_string(),
        64_800..86_400 => "about 2 months".to_string(),
        _ => {
            let months = calendar_months(from, to);
            if months <= 1 {
                return "1 month".to_string();
            }
            if months < 12 {
                return format!("{months} months");
            }
            let years = months / 12;
            let plural = |n: i64| if n == 1 { "year" } else { "years" };
            match months % 12 {
                0..3 => format!("about {years} {}", plural(years)),
                3..9 => format!("over {years} {}", plural(years)),
                _ => format!("almost {} years", years + 1),
            }
        }
    }
}

/// Whole calendar months from `from` to `to`, counting a month only once its
/// day and time of day have been reached.
fn calendar_months(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let months = i64::from(to.year() - from.year()) * 12 + i64::from(to.month())
        - i64::from(from.month());
    if (to.day(), to.time()) < (from.day(), from.time()) {
        months - 1
    } else {
        months
    }
}

fn rounded_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

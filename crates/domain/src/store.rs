use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, error, warn};
use uuid::Uuid;

use crate::{
    ExerciseDefinition, GenerateError, Notification, Notifier, PlanID, ReadError,
    TemplateRepository, Templates, UserProfile, WorkoutPlan, WorkoutProgressRecord, WorkoutStats,
    WriteError, catalog,
};

/// Persistent mirror of the plan store.
///
/// A missing entry is reported as `Ok(None)`, undecodable data as an error.
pub trait PlanRepository {
    fn read_plans(&self) -> Result<Option<Vec<WorkoutPlan>>, ReadError>;
    fn write_plans(&self, plans: &[WorkoutPlan]) -> Result<(), WriteError>;

    fn read_progress(&self) -> Result<Option<Vec<WorkoutProgressRecord>>, ReadError>;
    fn write_progress(&self, progress: &[WorkoutProgressRecord]) -> Result<(), WriteError>;
}

impl<R: PlanRepository + ?Sized> PlanRepository for &R {
    fn read_plans(&self) -> Result<Option<Vec<WorkoutPlan>>, ReadError> {
        (**self).read_plans()
    }

    fn write_plans(&self, plans: &[WorkoutPlan]) -> Result<(), WriteError> {
        (**self).write_plans(plans)
    }

    fn read_progress(&self) -> Result<Option<Vec<WorkoutProgressRecord>>, ReadError> {
        (**self).read_progress()
    }

    fn write_progress(&self, progress: &[WorkoutProgressRecord]) -> Result<(), WriteError> {
        (**self).write_progress(progress)
    }
}

impl<R: PlanRepository + ?Sized> PlanRepository for Rc<R> {
    fn read_plans(&self) -> Result<Option<Vec<WorkoutPlan>>, ReadError> {
        (**self).read_plans()
    }

    fn write_plans(&self, plans: &[WorkoutPlan]) -> Result<(), WriteError> {
        (**self).write_plans(plans)
    }

    fn read_progress(&self) -> Result<Option<Vec<WorkoutProgressRecord>>, ReadError> {
        (**self).read_progress()
    }

    fn write_progress(&self, progress: &[WorkoutProgressRecord]) -> Result<(), WriteError> {
        (**self).write_progress(progress)
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub trait IdGenerator {
    /// Return an identifier that has not been returned before.
    fn generate(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomID;

impl IdGenerator for RandomID {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Loading,
    Ready,
}

/// In-memory owner of the generated plans and the workout log.
///
/// The store starts in [`State::Loading`] and becomes [`State::Ready`] once
/// [`PlanStore::initialize`] has run. From then on every change is written
/// back to the repository. Persistence is best-effort: failures are logged and
/// reported through the notifier, the in-memory state stays authoritative.
pub struct PlanStore<R, N, T = Templates, C = SystemClock, I = RandomID> {
    repository: R,
    notifier: N,
    templates: T,
    clock: C,
    ids: I,
    state: State,
    user_plans: Vec<WorkoutPlan>,
    progress: Vec<WorkoutProgressRecord>,
}

impl<R, N> PlanStore<R, N>
where
    R: PlanRepository,
    N: Notifier,
{
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
            templates: Templates,
            clock: SystemClock,
            ids: RandomID,
            state: State::Loading,
            user_plans: vec![],
            progress: vec![],
        }
    }
}

impl<R, N, T, C, I> PlanStore<R, N, T, C, I>
where
    R: PlanRepository,
    N: Notifier,
    T: TemplateRepository,
    C: Clock,
    I: IdGenerator,
{
    pub fn with_templates<U: TemplateRepository>(self, templates: U) -> PlanStore<R, N, U, C, I> {
        PlanStore {
            repository: self.repository,
            notifier: self.notifier,
            templates,
            clock: self.clock,
            ids: self.ids,
            state: self.state,
            user_plans: self.user_plans,
            progress: self.progress,
        }
    }

    pub fn with_clock<D: Clock>(self, clock: D) -> PlanStore<R, N, T, D, I> {
        PlanStore {
            repository: self.repository,
            notifier: self.notifier,
            templates: self.templates,
            clock,
            ids: self.ids,
            state: self.state,
            user_plans: self.user_plans,
            progress: self.progress,
        }
    }

    pub fn with_id_generator<J: IdGenerator>(self, ids: J) -> PlanStore<R, N, T, C, J> {
        PlanStore {
            repository: self.repository,
            notifier: self.notifier,
            templates: self.templates,
            clock: self.clock,
            ids,
            state: self.state,
            user_plans: self.user_plans,
            progress: self.progress,
        }
    }

    /// Load the persisted state. Runs only once, later calls have no effect.
    ///
    /// Undecodable data is replaced by an empty list and reported as a warning.
    pub fn initialize(&mut self) {
        if self.state == State::Ready {
            return;
        }

        let mut failed = false;

        match self.repository.read_plans() {
            Ok(Some(plans)) => self.user_plans = plans,
            Ok(None) => {}
            Err(err) => {
                error!("failed to load workout plans: {err}");
                self.user_plans = vec![];
                failed = true;
            }
        }

        match self.repository.read_progress() {
            Ok(Some(progress)) => self.progress = progress,
            Ok(None) => {}
            Err(err) => {
                error!("failed to load workout progress: {err}");
                self.progress = vec![];
                failed = true;
            }
        }

        if failed {
            self.notifier.notify(Notification::warning(
                "Failed to load workout data",
                "There was an error loading your workout data",
            ));
        }

        self.state = State::Ready;
        debug!(
            "loaded {} workout plans and {} progress records",
            self.user_plans.len(),
            self.progress.len()
        );
        self.flush();
    }

    /// Write both lists to the repository. Does nothing while loading.
    pub fn flush(&self) {
        if self.state == State::Loading {
            return;
        }
        if let Err(err) = self.repository.write_plans(&self.user_plans) {
            self.report_write_error("workout plans", &err);
        }
        if let Err(err) = self.repository.write_progress(&self.progress) {
            self.report_write_error("workout progress", &err);
        }
    }

    fn report_write_error(&self, entity: &str, err: &WriteError) {
        warn!("failed to save {entity}: {err}");
        self.notifier.notify(Notification::warning(
            "Failed to save workout data",
            "Your changes are kept for this session but could not be stored",
        ));
    }

    /// Create a new plan for `profile` from the template matching
    /// `days_per_week` and put it at the front of the user plans.
    pub fn generate(
        &mut self,
        profile: &UserProfile,
        days_per_week: i64,
    ) -> Result<WorkoutPlan, GenerateError> {
        let Some(template) = self.templates.select_by_days_per_week(days_per_week) else {
            error!("failed to generate workout plan: no template for {days_per_week} days");
            self.notifier.notify(Notification::error(
                "Error",
                "Failed to generate workout plan",
            ));
            return Err(GenerateError::TemplateNotFound(days_per_week));
        };

        let plan = WorkoutPlan {
            id: PlanID::from(self.ids.generate()),
            user_id: Some(profile.id.clone()),
            generated_on: self.clock.now(),
            name: format!(
                "{days_per_week}-Day {} for {}",
                template.name, profile.name
            ),
            weeks: template.weeks.clone(),
        };

        debug!("generated workout plan {} from {}", plan.id, template.id);
        self.user_plans.insert(0, plan.clone());
        self.flush();
        self.notifier.notify(Notification::success(
            "Success",
            "New workout plan generated successfully!",
        ));

        Ok(plan)
    }

    /// Look up a plan, preferring user plans over templates.
    #[must_use]
    pub fn plan(&self, id: &str) -> Option<&WorkoutPlan> {
        if id.is_empty() {
            return None;
        }
        self.user_plans
            .iter()
            .find(|p| *p.id == id)
            .or_else(|| self.templates.template(id))
    }

    /// Record a completed workout. The plan id is not checked.
    pub fn log_progress(&mut self, plan_id: PlanID, notes: Option<String>, calories: Option<u32>) {
        let record = WorkoutProgressRecord {
            id: self.ids.generate().into(),
            plan_id,
            date: self.clock.now(),
            completed: true,
            notes,
            calories,
        };
        debug!("logged workout {} for plan {}", record.id, record.plan_id);
        self.progress.insert(0, record);
        self.flush();
        self.notifier
            .notify(Notification::success("Success", "Workout logged successfully!"));
    }

    #[must_use]
    pub fn progress_for_plan(&self, plan_id: &str) -> Vec<&WorkoutProgressRecord> {
        self.progress
            .iter()
            .filter(|p| *p.plan_id == plan_id)
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> WorkoutStats {
        WorkoutStats::from_records(&self.progress, self.clock.now())
    }

    #[must_use]
    pub fn user_plans(&self) -> &[WorkoutPlan] {
        &self.user_plans
    }

    #[must_use]
    pub fn progress(&self) -> &[WorkoutProgressRecord] {
        &self.progress
    }

    #[must_use]
    pub fn exercises(&self) -> &'static [ExerciseDefinition] {
        catalog::exercises()
    }

    #[must_use]
    pub fn templates(&self) -> &[WorkoutPlan] {
        self.templates.templates()
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == State::Loading
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::{Cell, RefCell},
        collections::BTreeSet,
    };

    use chrono::{Duration, NaiveDate, TimeZone};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        ActivityLevel, Gender, NotificationKind, StorageError, Week, templates, templates::FULL_BODY,
    };

    #[derive(Default)]
    struct FakeRepository {
        plans: RefCell<Option<Vec<WorkoutPlan>>>,
        progress: RefCell<Option<Vec<WorkoutProgressRecord>>>,
        corrupt_plans: bool,
        corrupt_progress: bool,
        fail_writes: Cell<bool>,
        writes: Cell<usize>,
    }

    impl PlanRepository for FakeRepository {
        fn read_plans(&self) -> Result<Option<Vec<WorkoutPlan>>, ReadError> {
            if self.corrupt_plans {
                return Err(StorageError::InvalidData("expected value".to_string()).into());
            }
            Ok(self.plans.borrow().clone())
        }

        fn write_plans(&self, plans: &[WorkoutPlan]) -> Result<(), WriteError> {
            self.writes.set(self.writes.get() + 1);
            if self.fail_writes.get() {
                return Err(StorageError::Unavailable.into());
            }
            *self.plans.borrow_mut() = Some(plans.to_vec());
            Ok(())
        }

        fn read_progress(&self) -> Result<Option<Vec<WorkoutProgressRecord>>, ReadError> {
            if self.corrupt_progress {
                return Err(StorageError::InvalidData("expected value".to_string()).into());
            }
            Ok(self.progress.borrow().clone())
        }

        fn write_progress(&self, progress: &[WorkoutProgressRecord]) -> Result<(), WriteError> {
            self.writes.set(self.writes.get() + 1);
            if self.fail_writes.get() {
                return Err(StorageError::Unavailable.into());
            }
            *self.progress.borrow_mut() = Some(progress.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Notifications(RefCell<Vec<Notification>>);

    impl Notifier for Notifications {
        fn notify(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    impl Notifications {
        fn kinds(&self) -> Vec<NotificationKind> {
            self.0.borrow().iter().map(|n| n.kind).collect()
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default)]
    struct SequentialID(Cell<u32>);

    impl IdGenerator for SequentialID {
        fn generate(&self) -> String {
            self.0.set(self.0.get() + 1);
            format!("id-{}", self.0.get())
        }
    }

    struct NoTemplates;

    impl TemplateRepository for NoTemplates {
        fn templates(&self) -> &[WorkoutPlan] {
            &[]
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: "user1".into(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            height_cm: 178.0,
            weight_kg: 75.0,
            body_fat_pct: Some(18.0),
            resting_hr: Some(65),
            activity_level: ActivityLevel::ModeratelyActive,
            goals: "Build muscle and improve overall fitness".to_string(),
            injury_history: None,
        }
    }

    fn store<'a>(
        repository: &'a FakeRepository,
        notifications: &'a Notifications,
    ) -> PlanStore<&'a FakeRepository, &'a Notifications, Templates, FixedClock, SequentialID>
    {
        PlanStore::new(repository, notifications)
            .with_clock(FixedClock(now()))
            .with_id_generator(SequentialID::default())
    }

    #[test]
    fn test_initialize_empty_repository() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);

        assert!(store.is_loading());
        store.initialize();

        assert_eq!(store.state(), State::Ready);
        assert!(store.user_plans().is_empty());
        assert!(store.progress().is_empty());
        assert!(notifications.kinds().is_empty());
        assert_eq!(*repository.plans.borrow(), Some(vec![]));
    }

    #[test]
    fn test_initialize_corrupt_plans() {
        let repository = FakeRepository {
            corrupt_plans: true,
            progress: RefCell::new(Some(vec![WorkoutProgressRecord {
                id: "p1".into(),
                plan_id: "plan-1".into(),
                date: now(),
                completed: true,
                notes: None,
                calories: Some(200),
            }])),
            ..FakeRepository::default()
        };
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);

        store.initialize();

        assert!(!store.is_loading());
        assert!(store.user_plans().is_empty());
        assert_eq!(store.progress().len(), 1);
        assert_eq!(notifications.kinds(), vec![NotificationKind::Warning]);
    }

    #[test]
    fn test_initialize_corrupt_progress() {
        let repository = FakeRepository {
            corrupt_progress: true,
            ..FakeRepository::default()
        };
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);

        store.initialize();

        assert!(store.progress().is_empty());
        assert_eq!(notifications.kinds(), vec![NotificationKind::Warning]);
    }

    #[test]
    fn test_initialize_only_once() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);

        store.initialize();
        store.generate(&profile(), 3).unwrap();
        *repository.plans.borrow_mut() = Some(vec![]);
        store.initialize();

        assert_eq!(store.user_plans().len(), 1);
    }

    #[test]
    fn test_no_writes_while_loading() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);

        store.generate(&profile(), 3).unwrap();
        store.log_progress("plan-1".into(), None, None);

        assert_eq!(repository.writes.get(), 0);
        assert_eq!(*repository.plans.borrow(), None);

        store.initialize();

        assert_eq!(repository.writes.get(), 2);
        assert_eq!(repository.plans.borrow().as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_generate() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();

        let plan = store.generate(&profile(), 3).unwrap();
        let template = templates::template(FULL_BODY).unwrap();

        assert_eq!(
            plan,
            WorkoutPlan {
                id: "id-1".into(),
                user_id: Some("user1".into()),
                generated_on: now(),
                name: "3-Day Full Body Workout Plan for John Doe".to_string(),
                weeks: template.weeks.clone(),
            }
        );
        assert_eq!(store.user_plans(), &[plan.clone()]);
        assert_eq!(*repository.plans.borrow(), Some(vec![plan]));
        assert_eq!(notifications.kinds(), vec![NotificationKind::Success]);
    }

    #[rstest]
    #[case(2, "2-Day Full Body Workout Plan for John Doe")]
    #[case(4, "4-Day Upper/Lower Split for John Doe")]
    #[case(5, "5-Day Upper Body Focus for John Doe")]
    #[case(7, "7-Day Push/Pull/Legs Split for John Doe")]
    #[case(12, "12-Day Full Body Workout Plan for John Doe")]
    fn test_generate_name(#[case] days: i64, #[case] expected: &str) {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();

        assert_eq!(store.generate(&profile(), days).unwrap().name, expected);
    }

    #[test]
    fn test_generate_copies_template() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();
        let original = templates::template(FULL_BODY).unwrap().weeks.clone();

        let mut plan = store.generate(&profile(), 3).unwrap();
        plan.weeks[0].days[0].exercises[0].sets = 99;
        plan.weeks[0].days[0].name = "Changed".to_string();
        plan.weeks.push(Week {
            week_number: 2,
            days: vec![],
        });

        assert_eq!(templates::template(FULL_BODY).unwrap().weeks, original);
        assert_eq!(store.user_plans()[0].weeks, original);
    }

    #[test]
    fn test_generate_prepends() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();

        let first = store.generate(&profile(), 3).unwrap();
        let second = store.generate(&profile(), 6).unwrap();

        assert_eq!(
            store
                .user_plans()
                .iter()
                .map(|p| p.id.clone())
                .collect::<Vec<_>>(),
            vec![second.id, first.id]
        );
    }

    #[test]
    fn test_generate_template_not_found() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications).with_templates(NoTemplates);
        store.initialize();

        assert_eq!(
            store.generate(&profile(), 3),
            Err(GenerateError::TemplateNotFound(3))
        );
        assert!(store.user_plans().is_empty());
        assert_eq!(notifications.kinds(), vec![NotificationKind::Error]);
    }

    #[test]
    fn test_generate_write_failure_keeps_plan() {
        let repository = FakeRepository {
            fail_writes: Cell::new(true),
            ..FakeRepository::default()
        };
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();

        let plan = store.generate(&profile(), 4).unwrap();

        assert_eq!(store.plan(&plan.id), Some(&plan));
        assert!(notifications.kinds().contains(&NotificationKind::Warning));
        assert_eq!(notifications.kinds().last(), Some(&NotificationKind::Success));
    }

    #[test]
    fn test_failed_write_heals_on_next_mutation() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();

        repository.fail_writes.set(true);
        let plan = store.generate(&profile(), 3).unwrap();
        assert_eq!(*repository.plans.borrow(), Some(vec![]));

        repository.fail_writes.set(false);
        store.log_progress(plan.id.clone(), None, None);

        assert_eq!(*repository.plans.borrow(), Some(vec![plan.clone()]));
        assert_eq!(
            repository
                .progress
                .borrow()
                .as_ref()
                .map(|p| p[0].plan_id.clone()),
            Some(plan.id)
        );
    }

    #[test]
    fn test_mutations_write_both_lists() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();
        let writes = repository.writes.get();

        store.generate(&profile(), 3).unwrap();
        assert_eq!(repository.writes.get(), writes + 2);

        store.log_progress("plan-1".into(), None, None);
        assert_eq!(repository.writes.get(), writes + 4);
    }

    #[test]
    fn test_plan() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();
        let plan = store.generate(&profile(), 3).unwrap();

        assert_eq!(store.plan(&plan.id), Some(&plan));
        assert_eq!(
            store.plan(FULL_BODY).map(|p| p.name.as_str()),
            Some("Full Body Workout Plan")
        );
        assert_eq!(store.plan("unknown"), None);
        assert_eq!(store.plan(""), None);
    }

    #[test]
    fn test_plan_prefers_user_plans() {
        let shadowing = WorkoutPlan {
            id: FULL_BODY.into(),
            user_id: Some("user1".into()),
            generated_on: now(),
            name: "My Full Body".to_string(),
            weeks: vec![],
        };
        let repository = FakeRepository {
            plans: RefCell::new(Some(vec![shadowing.clone()])),
            ..FakeRepository::default()
        };
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();

        assert_eq!(store.plan(FULL_BODY), Some(&shadowing));
    }

    #[test]
    fn test_log_progress() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);
        store.initialize();

        store.log_progress("plan-1".into(), Some("Felt strong".to_string()), Some(350));
        store.log_progress("does-not-exist".into(), None, None);
        store.log_progress("plan-1".into(), None, Some(150));

        let expected = vec![
            WorkoutProgressRecord {
                id: "id-3".into(),
                plan_id: "plan-1".into(),
                date: now(),
                completed: true,
                notes: None,
                calories: Some(150),
            },
            WorkoutProgressRecord {
                id: "id-2".into(),
                plan_id: "does-not-exist".into(),
                date: now(),
                completed: true,
                notes: None,
                calories: None,
            },
            WorkoutProgressRecord {
                id: "id-1".into(),
                plan_id: "plan-1".into(),
                date: now(),
                completed: true,
                notes: Some("Felt strong".to_string()),
                calories: Some(350),
            },
        ];
        assert_eq!(store.progress(), expected.as_slice());
        assert_eq!(*repository.progress.borrow(), Some(expected.clone()));
        assert_eq!(
            store.progress_for_plan("plan-1"),
            vec![&expected[0], &expected[2]]
        );
        assert!(store.progress_for_plan("plan-2").is_empty());
    }

    #[test]
    fn test_stats() {
        let records = [0, 3, 7, 8]
            .into_iter()
            .map(|days| WorkoutProgressRecord {
                id: format!("p{days}").into(),
                plan_id: "plan-1".into(),
                date: now() - Duration::days(days),
                completed: true,
                notes: None,
                calories: Some(100),
            })
            .collect::<Vec<_>>();
        let repository = FakeRepository {
            progress: RefCell::new(Some(records)),
            ..FakeRepository::default()
        };
        let notifications = Notifications::default();
        let mut store = store(&repository, &notifications);

        assert_eq!(store.stats(), WorkoutStats::default());

        store.initialize();

        assert_eq!(
            store.stats(),
            WorkoutStats {
                total_workouts: 4,
                total_calories: 400,
                workouts_this_week: 3,
            }
        );
    }

    #[test]
    fn test_catalog_passthrough() {
        let repository = FakeRepository::default();
        let notifications = Notifications::default();
        let store = store(&repository, &notifications);

        assert_eq!(store.exercises().len(), 20);
        assert_eq!(store.templates().len(), 5);
    }

    #[test]
    fn test_random_id() {
        let ids = (0..100)
            .map(|_| RandomID.generate())
            .collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), 100);
    }
}

use std::path::Path;

use tracing::debug;

use crate::activity::{Activity, LongView, ShortView};
use crate::config::SchedulerConfig;
use crate::course::Course;
use crate::error::ScheduleError;
use crate::event::Event;
use crate::persistence::{self, PersistenceResult};

pub const DEFAULT_SCHEDULE_TITLE: &str = "My Schedule";

/// A read-only course catalog plus the student's schedule built from it.
///
/// Every insertion keeps the schedule free of duplicates and conflicts. All
/// checks run before the schedule is touched, so a rejected add leaves it as
/// it was.
#[derive(Debug, Clone)]
pub struct Scheduler {
    catalog: Vec<Course>,
    schedule: Vec<Activity>,
    title: String,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            schedule: Vec::new(),
            title: DEFAULT_SCHEDULE_TITLE.to_string(),
        }
    }

    /// Keeps the first course seen for each (name, section) pair.
    pub fn with_catalog<I>(courses: I) -> Self
    where
        I: IntoIterator<Item = Course>,
    {
        let mut catalog: Vec<Course> = Vec::new();
        for course in courses {
            if catalog
                .iter()
                .any(|existing| existing.matches(course.name(), course.section()))
            {
                continue;
            }
            catalog.push(course);
        }
        Self {
            catalog,
            ..Self::new()
        }
    }

    pub fn from_catalog_file<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let courses = persistence::read_course_records(path)?;
        Ok(Self::with_catalog(courses))
    }

    pub fn from_config(config: &SchedulerConfig) -> PersistenceResult<Self> {
        let mut scheduler = match &config.catalog_path {
            Some(path) => Self::from_catalog_file(path)?,
            None => Self::new(),
        };
        scheduler.set_schedule_title(config.schedule_title.clone());
        Ok(scheduler)
    }

    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    pub fn schedule(&self) -> &[Activity] {
        &self.schedule
    }

    pub fn course_catalog(&self) -> Vec<ShortView> {
        self.catalog.iter().map(Course::short_view).collect()
    }

    pub fn scheduled_activities(&self) -> Vec<ShortView> {
        self.schedule.iter().map(Activity::short_view).collect()
    }

    pub fn full_scheduled_activities(&self) -> Vec<LongView> {
        self.schedule.iter().map(Activity::long_view).collect()
    }

    pub fn get_course_from_catalog(&self, name: &str, section: &str) -> Option<&Course> {
        self.catalog
            .iter()
            .find(|course| course.matches(name, section))
    }

    /// Adds a catalog course to the schedule.
    ///
    /// Returns `Ok(false)` when no course with this name and section is in the
    /// catalog, and an error when the course duplicates or conflicts with
    /// something already scheduled.
    pub fn add_course_to_schedule(
        &mut self,
        name: &str,
        section: &str,
    ) -> Result<bool, ScheduleError> {
        let Some(course) = self.get_course_from_catalog(name, section) else {
            debug!(name, section, "course not found in catalog");
            return Ok(false);
        };
        let candidate = Activity::Course(course.clone());

        if self
            .schedule
            .iter()
            .any(|existing| existing.is_duplicate_of(&candidate))
        {
            return Err(ScheduleError::AlreadyEnrolled(name.to_string()));
        }
        if self.has_conflict(&candidate) {
            debug!(name, section, "course rejected: schedule conflict");
            return Err(ScheduleError::CourseConflict);
        }

        self.schedule.push(candidate);
        debug!(name, section, size = self.schedule.len(), "course added");
        Ok(true)
    }

    /// Creates an event and adds it to the schedule. Field validation runs first;
    /// any entry already carrying this title blocks the event.
    pub fn add_event_to_schedule(
        &mut self,
        title: &str,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        details: &str,
    ) -> Result<(), ScheduleError> {
        let candidate = Activity::Event(Event::new(
            title,
            meeting_days,
            start_time,
            end_time,
            details,
        )?);

        if self
            .schedule
            .iter()
            .any(|existing| existing.title() == title)
        {
            return Err(ScheduleError::EventAlreadyCreated(title.to_string()));
        }
        if self.has_conflict(&candidate) {
            debug!(title, "event rejected: schedule conflict");
            return Err(ScheduleError::EventConflict);
        }

        self.schedule.push(candidate);
        debug!(title, size = self.schedule.len(), "event added");
        Ok(())
    }

    fn has_conflict(&self, candidate: &Activity) -> bool {
        self.schedule
            .iter()
            .any(|existing| existing.check_conflict(candidate).is_err())
    }

    /// Returns `false` and leaves the schedule alone when `index` is out of range.
    pub fn remove_activity_from_schedule(&mut self, index: usize) -> bool {
        if index >= self.schedule.len() {
            return false;
        }
        let removed = self.schedule.remove(index);
        debug!(index, title = removed.title(), "activity removed");
        true
    }

    pub fn reset_schedule(&mut self) {
        self.schedule = Vec::new();
    }

    pub fn schedule_title(&self) -> &str {
        &self.title
    }

    pub fn set_schedule_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn export_schedule<P: AsRef<Path>>(&self, path: P) -> PersistenceResult<()> {
        persistence::write_activity_records(path, &self.schedule)
    }
}

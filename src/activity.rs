use serde::Serialize;
use std::fmt;

use crate::course::Course;
use crate::error::ConflictError;
use crate::event::Event;
use crate::meeting::MeetingSpec;

/// Four display columns: code, section, title, meeting string.
pub type ShortView = [String; 4];

/// Seven display columns: code, section, title, credits, instructor, meeting string,
/// details. Columns a variant does not have are empty strings.
pub type LongView = [String; 7];

/// Anything that can sit on a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    Course(Course),
    Event(Event),
}

impl Activity {
    pub fn title(&self) -> &str {
        match self {
            Activity::Course(course) => course.title(),
            Activity::Event(event) => event.title(),
        }
    }

    pub fn meeting(&self) -> &MeetingSpec {
        match self {
            Activity::Course(course) => course.meeting(),
            Activity::Event(event) => event.meeting(),
        }
    }

    /// Symmetric; see [`MeetingSpec::conflicts_with`].
    pub fn conflicts_with(&self, other: &Activity) -> bool {
        self.meeting().conflicts_with(other.meeting())
    }

    pub fn check_conflict(&self, other: &Activity) -> Result<(), ConflictError> {
        if self.conflicts_with(other) {
            return Err(ConflictError);
        }
        Ok(())
    }

    /// Same variant and same title. Weaker than equality.
    pub fn is_duplicate_of(&self, other: &Activity) -> bool {
        match self {
            Activity::Course(course) => course.is_duplicate_of(other),
            Activity::Event(event) => event.is_duplicate_of(other),
        }
    }

    pub fn short_view(&self) -> ShortView {
        match self {
            Activity::Course(course) => course.short_view(),
            Activity::Event(event) => event.short_view(),
        }
    }

    pub fn long_view(&self) -> LongView {
        match self {
            Activity::Course(course) => course.long_view(),
            Activity::Event(event) => event.long_view(),
        }
    }

    pub fn record_fields(&self) -> Vec<String> {
        match self {
            Activity::Course(course) => course.record_fields(),
            Activity::Event(event) => event.record_fields(),
        }
    }

    pub fn as_course(&self) -> Option<&Course> {
        match self {
            Activity::Course(course) => Some(course),
            Activity::Event(_) => None,
        }
    }

    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Activity::Event(event) => Some(event),
            Activity::Course(_) => None,
        }
    }
}

impl From<Course> for Activity {
    fn from(value: Course) -> Self {
        Activity::Course(value)
    }
}

impl From<Event> for Activity {
    fn from(value: Event) -> Self {
        Activity::Event(value)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Course(course) => fmt::Display::fmt(course, f),
            Activity::Event(event) => fmt::Display::fmt(event, f),
        }
    }
}

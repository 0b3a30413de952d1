use thiserror::Error;

/// Rejection raised by a validating constructor or setter. The previous value,
/// if any, is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid title.")]
    Title,
    #[error("Invalid course name.")]
    CourseName,
    #[error("Invalid section.")]
    Section,
    #[error("Invalid credits.")]
    Credits,
    #[error("Invalid instructor id.")]
    InstructorId,
    #[error("Invalid meeting days and times.")]
    MeetingDaysAndTime,
}

/// Two activities meet at conflicting times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Schedule conflict.")]
pub struct ConflictError;

/// Reasons an activity could not be added to a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("You are already enrolled in {0}")]
    AlreadyEnrolled(String),
    #[error("You have already created an event called {0}")]
    EventAlreadyCreated(String),
    #[error("The course cannot be added due to a conflict.")]
    CourseConflict,
    #[error("The event cannot be added due to a conflict.")]
    EventConflict,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ScheduleError {
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ScheduleError::CourseConflict | ScheduleError::EventConflict
        )
    }
}

pub mod activity;
pub mod config;
pub mod course;
pub mod error;
pub mod event;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod meeting;
pub mod persistence;
pub mod scheduler;
pub(crate) mod validation;

pub use activity::{Activity, LongView, ShortView};
pub use config::{ConfigError, SchedulerConfig};
pub use course::Course;
pub use error::{ConflictError, ScheduleError, ValidationError};
pub use event::Event;
pub use meeting::{MeetingDay, MeetingSpec};
pub use persistence::{
    PersistenceError, PersistenceResult, RecordError, parse_course_record, read_course_records,
    write_activity_records,
};
pub use scheduler::{DEFAULT_SCHEDULE_TITLE, Scheduler};

use serde::Serialize;
use std::fmt;

use crate::activity::{Activity, LongView, ShortView};
use crate::error::ValidationError;
use crate::meeting::MeetingSpec;
use crate::validation;

/// A free-form personal event placed on the schedule alongside courses.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    title: String,
    #[serde(flatten)]
    meeting: MeetingSpec,
    details: String,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
        details: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        let meeting = MeetingSpec::for_event(meeting_days, start_time, end_time)?;
        Ok(Self {
            title,
            meeting,
            details: details.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn meeting(&self) -> &MeetingSpec {
        &self.meeting
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_meeting_days_and_time(
        &mut self,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<(), ValidationError> {
        self.meeting = MeetingSpec::for_event(meeting_days, start_time, end_time)?;
        Ok(())
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    /// Another event with the same title.
    pub fn is_duplicate_of(&self, other: &Activity) -> bool {
        matches!(other, Activity::Event(event) if event.title == self.title)
    }

    pub fn short_view(&self) -> ShortView {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            self.meeting.meeting_string(),
        ]
    }

    pub fn long_view(&self) -> LongView {
        [
            String::new(),
            String::new(),
            self.title.clone(),
            String::new(),
            String::new(),
            self.meeting.meeting_string(),
            self.details.clone(),
        ]
    }

    /// `title,meetingDays,startTime,endTime,details`
    pub fn record_fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.meeting.pattern(),
            self.meeting.start_time().to_string(),
            self.meeting.end_time().to_string(),
            self.details.clone(),
        ]
    }
}

// Details are descriptive only and do not take part in equality.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.meeting == other.meeting
    }
}

impl Eq for Event {}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.record_fields().join(","))
    }
}

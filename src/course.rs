use serde::Serialize;
use std::fmt;

use crate::activity::{Activity, LongView, ShortView};
use crate::error::ValidationError;
use crate::meeting::{ARRANGED_CODE, MeetingSpec};
use crate::validation;

/// An offered section of a catalog course.
///
/// Every field is validated on construction and by each setter; a rejected update
/// leaves the course exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u8,
    instructor_id: String,
    #[serde(flatten)]
    meeting: MeetingSpec,
}

impl Course {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let title = title.into();
        let section = section.into();
        let instructor_id = instructor_id.into();

        validation::validate_title(&title)?;
        let meeting = MeetingSpec::for_course(meeting_days, start_time, end_time)?;
        validation::validate_course_name(&name)?;
        validation::validate_section(&section)?;
        let credits = validation::validate_credits(credits)?;
        validation::validate_instructor_id(&instructor_id)?;

        Ok(Self {
            name,
            title,
            section,
            credits,
            instructor_id,
            meeting,
        })
    }

    /// A course with no fixed meeting time.
    pub fn arranged(
        name: impl Into<String>,
        title: impl Into<String>,
        section: impl Into<String>,
        credits: i32,
        instructor_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(
            name,
            title,
            section,
            credits,
            instructor_id,
            &ARRANGED_CODE.to_string(),
            0,
            0,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }

    pub fn meeting(&self) -> &MeetingSpec {
        &self.meeting
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        let title = title.into();
        validation::validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_section(&mut self, section: impl Into<String>) -> Result<(), ValidationError> {
        let section = section.into();
        validation::validate_section(&section)?;
        self.section = section;
        Ok(())
    }

    pub fn set_credits(&mut self, credits: i32) -> Result<(), ValidationError> {
        self.credits = validation::validate_credits(credits)?;
        Ok(())
    }

    pub fn set_instructor_id(
        &mut self,
        instructor_id: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let instructor_id = instructor_id.into();
        validation::validate_instructor_id(&instructor_id)?;
        self.instructor_id = instructor_id;
        Ok(())
    }

    pub fn set_meeting_days_and_time(
        &mut self,
        meeting_days: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<(), ValidationError> {
        self.meeting = MeetingSpec::for_course(meeting_days, start_time, end_time)?;
        Ok(())
    }

    /// Same catalog entry: name and section both match.
    pub fn matches(&self, name: &str, section: &str) -> bool {
        self.name == name && self.section == section
    }

    /// Another course with the same title.
    pub fn is_duplicate_of(&self, other: &Activity) -> bool {
        matches!(other, Activity::Course(course) if course.title == self.title)
    }

    pub fn short_view(&self) -> ShortView {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.meeting.meeting_string(),
        ]
    }

    pub fn long_view(&self) -> LongView {
        [
            self.name.clone(),
            self.section.clone(),
            self.title.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting.meeting_string(),
            String::new(),
        ]
    }

    /// `name,title,section,credits,instructorId,meetingDays[,startTime,endTime]`;
    /// the times are omitted for arranged courses.
    pub fn record_fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.title.clone(),
            self.section.clone(),
            self.credits.to_string(),
            self.instructor_id.clone(),
            self.meeting.pattern(),
        ];
        if !self.meeting.is_arranged() {
            fields.push(self.meeting.start_time().to_string());
            fields.push(self.meeting.end_time().to_string());
        }
        fields
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.record_fields().join(","))
    }
}

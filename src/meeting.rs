use chrono::{NaiveTime, Weekday};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

use crate::error::ValidationError;

/// Code reserved for meetings with no fixed day or time.
pub const ARRANGED_CODE: char = 'A';

/// Whether `pattern` is exactly the arranged sentinel.
pub fn is_arranged_pattern(pattern: &str) -> bool {
    let mut codes = pattern.chars();
    codes.next() == Some(ARRANGED_CODE) && codes.next().is_none()
}

const ARRANGED_LABEL: &str = "Arranged";
const MAX_ENCODED_TIME: i32 = 2359;
const MINUTES_PER_HOUR: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeetingDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl MeetingDay {
    pub const ALL: [MeetingDay; 7] = [
        MeetingDay::Monday,
        MeetingDay::Tuesday,
        MeetingDay::Wednesday,
        MeetingDay::Thursday,
        MeetingDay::Friday,
        MeetingDay::Saturday,
        MeetingDay::Sunday,
    ];

    const WEEKDAYS: [MeetingDay; 5] = [
        MeetingDay::Monday,
        MeetingDay::Tuesday,
        MeetingDay::Wednesday,
        MeetingDay::Thursday,
        MeetingDay::Friday,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'M' => Some(MeetingDay::Monday),
            'T' => Some(MeetingDay::Tuesday),
            'W' => Some(MeetingDay::Wednesday),
            'H' => Some(MeetingDay::Thursday),
            'F' => Some(MeetingDay::Friday),
            'S' => Some(MeetingDay::Saturday),
            'U' => Some(MeetingDay::Sunday),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            MeetingDay::Monday => 'M',
            MeetingDay::Tuesday => 'T',
            MeetingDay::Wednesday => 'W',
            MeetingDay::Thursday => 'H',
            MeetingDay::Friday => 'F',
            MeetingDay::Saturday => 'S',
            MeetingDay::Sunday => 'U',
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            MeetingDay::Monday => Weekday::Mon,
            MeetingDay::Tuesday => Weekday::Tue,
            MeetingDay::Wednesday => Weekday::Wed,
            MeetingDay::Thursday => Weekday::Thu,
            MeetingDay::Friday => Weekday::Fri,
            MeetingDay::Saturday => Weekday::Sat,
            MeetingDay::Sunday => Weekday::Sun,
        }
    }
}

/// Which meeting patterns and times a kind of activity accepts.
#[derive(Debug, Clone, Copy)]
struct MeetingRules {
    days: &'static [MeetingDay],
    allow_arranged: bool,
    /// Whether a fixed meeting may start or end during hour 0.
    allow_midnight_hour: bool,
    /// Whether a meeting may end at the same encoded time it starts.
    allow_equal_times: bool,
}

const BASE_RULES: MeetingRules = MeetingRules {
    days: &MeetingDay::ALL,
    allow_arranged: true,
    allow_midnight_hour: false,
    allow_equal_times: false,
};

const COURSE_RULES: MeetingRules = MeetingRules {
    days: &MeetingDay::WEEKDAYS,
    allow_arranged: true,
    allow_midnight_hour: false,
    allow_equal_times: false,
};

const EVENT_RULES: MeetingRules = MeetingRules {
    days: &MeetingDay::ALL,
    allow_arranged: false,
    allow_midnight_hour: true,
    allow_equal_times: true,
};

impl MeetingRules {
    fn checked_time(&self, time: i32) -> Result<u16, ValidationError> {
        if !(0..=MAX_ENCODED_TIME).contains(&time) {
            return Err(ValidationError::MeetingDaysAndTime);
        }
        let hour = time / 100;
        let minute = time % 100;
        if minute >= MINUTES_PER_HOUR || (hour == 0 && !self.allow_midnight_hour) {
            return Err(ValidationError::MeetingDaysAndTime);
        }
        u16::try_from(time).map_err(|_| ValidationError::MeetingDaysAndTime)
    }
}

/// A weekly meeting pattern with military start and end times (`hour * 100 + minute`),
/// or the arranged sentinel.
///
/// Values are only produced by the validating constructors, so every `MeetingSpec`
/// in circulation is legal for the kind of activity that built it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeetingSpec {
    days: Vec<MeetingDay>,
    start_time: u16,
    end_time: u16,
    arranged: bool,
}

impl MeetingSpec {
    /// Validates against the rules shared by every activity: any day of the week or
    /// the arranged sentinel, no meeting during hour 0, end strictly after start.
    pub fn new(pattern: &str, start_time: i32, end_time: i32) -> Result<Self, ValidationError> {
        Self::build(pattern, start_time, end_time, &BASE_RULES)
    }

    /// Course meetings are limited to `MTWHF` or `A`.
    pub fn for_course(
        pattern: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self, ValidationError> {
        Self::build(pattern, start_time, end_time, &COURSE_RULES)
    }

    /// Event meetings accept weekends, may touch hour 0 and may end when they start,
    /// but can never be arranged.
    pub fn for_event(
        pattern: &str,
        start_time: i32,
        end_time: i32,
    ) -> Result<Self, ValidationError> {
        Self::build(pattern, start_time, end_time, &EVENT_RULES)
    }

    pub fn arranged() -> Self {
        Self {
            days: Vec::new(),
            start_time: 0,
            end_time: 0,
            arranged: true,
        }
    }

    fn build(
        pattern: &str,
        start_time: i32,
        end_time: i32,
        rules: &MeetingRules,
    ) -> Result<Self, ValidationError> {
        if pattern.is_empty() {
            return Err(ValidationError::MeetingDaysAndTime);
        }

        if pattern.contains(ARRANGED_CODE) {
            let sole_code = pattern.chars().count() == 1;
            if !rules.allow_arranged || !sole_code || start_time != 0 || end_time != 0 {
                return Err(ValidationError::MeetingDaysAndTime);
            }
            return Ok(Self::arranged());
        }

        let mut days = Vec::with_capacity(pattern.len());
        for code in pattern.chars() {
            let day = MeetingDay::from_code(code)
                .filter(|day| rules.days.contains(day))
                .ok_or(ValidationError::MeetingDaysAndTime)?;
            if days.contains(&day) {
                return Err(ValidationError::MeetingDaysAndTime);
            }
            days.push(day);
        }

        let start = rules.checked_time(start_time)?;
        let end = rules.checked_time(end_time)?;
        if end < start || (end == start && !rules.allow_equal_times) {
            return Err(ValidationError::MeetingDaysAndTime);
        }

        Ok(Self {
            days,
            start_time: start,
            end_time: end,
            arranged: false,
        })
    }

    /// Day codes in the order they were given, or `"A"` when arranged.
    pub fn pattern(&self) -> String {
        if self.arranged {
            return ARRANGED_CODE.to_string();
        }
        self.days.iter().map(|day| day.code()).collect()
    }

    pub fn days(&self) -> &[MeetingDay] {
        &self.days
    }

    pub fn start_time(&self) -> u16 {
        self.start_time
    }

    pub fn end_time(&self) -> u16 {
        self.end_time
    }

    pub fn is_arranged(&self) -> bool {
        self.arranged
    }

    pub fn meets_on(&self, weekday: Weekday) -> bool {
        self.days.iter().any(|day| day.weekday() == weekday)
    }

    /// Exact-match overlap: a conflict is either a shared boundary minute (on any
    /// days) or identical start and end times on at least one shared day. Partially
    /// overlapping intervals are not conflicts. Arranged meetings take part with
    /// their zero times, so two of them always touch at 0.
    pub fn conflicts_with(&self, other: &MeetingSpec) -> bool {
        if self.end_time == other.start_time || self.start_time == other.end_time {
            return true;
        }
        self.start_time == other.start_time
            && self.end_time == other.end_time
            && self.days.iter().any(|day| other.days.contains(day))
    }

    /// `"Arranged"` or `"<pattern> <start>-<end>"` in 12-hour form, e.g. `MW 1:30PM-2:45PM`.
    pub fn meeting_string(&self) -> String {
        if self.arranged {
            return ARRANGED_LABEL.to_string();
        }
        format!(
            "{} {}-{}",
            self.pattern(),
            time_string(self.start_time),
            time_string(self.end_time)
        )
    }
}

impl fmt::Display for MeetingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.meeting_string())
    }
}

impl Serialize for MeetingSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MeetingSpec", 4)?;
        state.serialize_field("meeting_days", &self.pattern())?;
        state.serialize_field("start_time", &self.start_time)?;
        state.serialize_field("end_time", &self.end_time)?;
        state.serialize_field("meeting", &self.meeting_string())?;
        state.end()
    }
}

/// Renders a military time as `h:mmAM`/`h:mmPM`; hour 0 renders as 12.
pub fn time_string(time: u16) -> String {
    let hour = u32::from(time / 100);
    let minute = u32::from(time % 100);
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(clock) => clock.format("%-I:%M%p").to_string(),
        None => time.to_string(),
    }
}

use super::{PersistenceError, PersistenceResult, RecordError};
use crate::activity::Activity;
use crate::course::Course;
use crate::meeting::is_arranged_pattern;
use csv::{ErrorKind, ReaderBuilder, Trim, WriterBuilder};
use std::path::Path;
use tracing::{debug, info};

const ARRANGED_FIELD_COUNT: usize = 6;
const TIMED_FIELD_COUNT: usize = 8;

fn load_error(path: &Path, source: csv::Error) -> PersistenceError {
    PersistenceError::Load {
        path: path.to_path_buf(),
        source,
    }
}

fn save_error(path: &Path, source: csv::Error) -> PersistenceError {
    PersistenceError::Save {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads a catalog of `name,title,section,credits,instructorId,meetingDays[,start,end]`
/// lines. Every comma separates fields; quotes are ordinary characters. Lines that
/// do not make a valid course are skipped, as are repeats of a (name, section)
/// pair already read.
pub fn read_course_records<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Course>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|err| load_error(path, err))?;

    let mut courses: Vec<Course> = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if matches!(err.kind(), ErrorKind::Io(_)) => {
                return Err(load_error(path, err));
            }
            Err(err) => {
                debug!(error = %err, "skipping unreadable catalog line");
                continue;
            }
        };
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let fields: Vec<&str> = record.iter().collect();

        let course = match parse_course_record(&fields) {
            Ok(course) => course,
            Err(err) => {
                debug!(line, error = %err, "skipping invalid catalog line");
                continue;
            }
        };
        if courses
            .iter()
            .any(|existing| existing.matches(course.name(), course.section()))
        {
            debug!(
                line,
                name = course.name(),
                section = course.section(),
                "skipping duplicate catalog entry"
            );
            continue;
        }
        courses.push(course);
    }

    info!(path = %path.display(), count = courses.len(), "loaded course catalog");
    Ok(courses)
}

/// Builds a course from the trimmed fields of one catalog line.
pub fn parse_course_record<S: AsRef<str>>(fields: &[S]) -> Result<Course, RecordError> {
    let fields: Vec<&str> = fields.iter().map(|field| field.as_ref().trim()).collect();
    let expected = match fields.get(5) {
        Some(days) if is_arranged_pattern(days) => ARRANGED_FIELD_COUNT,
        _ => TIMED_FIELD_COUNT,
    };
    if fields.len() != expected {
        return Err(RecordError::FieldCount(fields.len()));
    }

    let credits = parse_int("credits", fields[3])?;
    let (start_time, end_time) = if expected == TIMED_FIELD_COUNT {
        (
            parse_int("start time", fields[6])?,
            parse_int("end time", fields[7])?,
        )
    } else {
        (0, 0)
    };

    let course = Course::new(
        fields[0], fields[1], fields[2], credits, fields[4], fields[5], start_time, end_time,
    )?;
    Ok(course)
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, RecordError> {
    value
        .parse::<i32>()
        .map_err(|_| RecordError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Writes one line per activity in its record form.
pub fn write_activity_records<P: AsRef<Path>>(
    path: P,
    activities: &[Activity],
) -> PersistenceResult<()> {
    let path = path.as_ref();
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|err| save_error(path, err))?;
    for activity in activities {
        writer
            .write_record(activity.record_fields())
            .map_err(|err| save_error(path, err))?;
    }
    writer
        .flush()
        .map_err(|err| save_error(path, csv::Error::from(err)))?;

    info!(path = %path.display(), count = activities.len(), "exported schedule");
    Ok(())
}

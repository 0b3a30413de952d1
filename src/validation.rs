use crate::error::ValidationError;

const MIN_NAME_LENGTH: usize = 5;
const MAX_NAME_LENGTH: usize = 8;
const MIN_LETTER_COUNT: usize = 1;
const MAX_LETTER_COUNT: usize = 4;
const DIGIT_COUNT: usize = 3;
const SECTION_LENGTH: usize = 3;
pub(crate) const MIN_CREDITS: i32 = 1;
pub(crate) const MAX_CREDITS: i32 = 5;

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::Title);
    }
    Ok(())
}

/// Course names look like `L[LLL] NNN`: one to four letters, a single space,
/// then exactly three digits.
pub(crate) fn validate_course_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if !(MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) {
        return Err(ValidationError::CourseName);
    }

    let mut letter_count = 0;
    let mut digit_count = 0;
    let mut found_space = false;
    for character in name.chars() {
        if !found_space {
            if character.is_alphabetic() {
                letter_count += 1;
            } else if character == ' ' {
                found_space = true;
            } else {
                return Err(ValidationError::CourseName);
            }
        } else if character.is_ascii_digit() {
            digit_count += 1;
        } else {
            return Err(ValidationError::CourseName);
        }
    }

    if !(MIN_LETTER_COUNT..=MAX_LETTER_COUNT).contains(&letter_count) {
        return Err(ValidationError::CourseName);
    }
    if digit_count != DIGIT_COUNT {
        return Err(ValidationError::CourseName);
    }
    Ok(())
}

/// Three characters, none of them a letter.
pub(crate) fn validate_section(section: &str) -> Result<(), ValidationError> {
    if section.chars().count() != SECTION_LENGTH {
        return Err(ValidationError::Section);
    }
    if section.chars().any(char::is_alphabetic) {
        return Err(ValidationError::Section);
    }
    Ok(())
}

pub(crate) fn validate_credits(credits: i32) -> Result<u8, ValidationError> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(ValidationError::Credits);
    }
    u8::try_from(credits).map_err(|_| ValidationError::Credits)
}

pub(crate) fn validate_instructor_id(instructor_id: &str) -> Result<(), ValidationError> {
    if instructor_id.is_empty() {
        return Err(ValidationError::InstructorId);
    }
    Ok(())
}

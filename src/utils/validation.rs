use crate::domain::model::CalendarDate;
use crate::utils::error::{AgeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const MIN_MONTH: i32 = 1;
pub const MAX_MONTH: i32 = 12;
pub const MIN_DAY: i32 = 1;
// Month length is not checked; every month accepts 31.
pub const MAX_DAY: i32 = 31;

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AgeError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_not_after<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    limit: T,
) -> Result<()> {
    if value > limit {
        return Err(AgeError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must not be later than {}", limit),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AgeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Coarse checks on a typed-in birth date, in order year, month, day.
///
/// Only the year is compared against `today`; a birth date later in the
/// current year passes and yields an age of -1.
pub fn validate_birth_date(birth: &CalendarDate, today: &CalendarDate) -> Result<()> {
    validate_not_after("birth year", birth.year, today.year)?;
    validate_range("birth month", birth.month, MIN_MONTH, MAX_MONTH)?;
    validate_range("birth day", birth.day, MIN_DAY, MAX_DAY)?;
    Ok(())
}

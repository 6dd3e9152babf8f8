use crate::error::CoreError;
use chrono::NaiveDate;

pub const MAX_ID_LEN: usize = 10;
pub const MAX_NAME_LEN: usize = 10;
pub const MAX_ADDRESS_LEN: usize = 30;
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Rejects values longer than `max` characters with `err`.
pub fn ensure_max_len(value: &str, max: usize, err: CoreError) -> Result<(), CoreError> {
    if value.chars().count() > max {
        Err(err)
    } else {
        Ok(())
    }
}

/// Accepts `date` only when it falls strictly after `today`.
pub fn ensure_future_date(today: NaiveDate, date: NaiveDate) -> Result<NaiveDate, CoreError> {
    if date > today {
        Ok(date)
    } else {
        Err(CoreError::InvalidDate)
    }
}

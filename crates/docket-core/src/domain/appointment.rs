use crate::domain::ids::AppointmentId;
use crate::error::CoreError;
use crate::rules::validation::{ensure_future_date, ensure_max_len, MAX_DESCRIPTION_LEN};
use crate::time::{format_appointment_date, parse_appointment_date};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A dated appointment. The date always lies strictly after the `today` it
/// was last validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    id: AppointmentId,
    date: NaiveDate,
    description: String,
}

impl Appointment {
    pub fn new(
        id: &str,
        date: &str,
        description: &str,
        today: NaiveDate,
    ) -> Result<Self, CoreError> {
        let id = AppointmentId::new(id)?;
        let date = validate_date(date, today)?;
        let description = validate_description(description)?;
        Ok(Self {
            id,
            date,
            description,
        })
    }

    pub fn id(&self) -> &AppointmentId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_date(&mut self, date: &str, today: NaiveDate) -> Result<(), CoreError> {
        self.date = validate_date(date, today)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), CoreError> {
        self.description = validate_description(description)?;
        Ok(())
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.id,
            format_appointment_date(self.date),
            self.description
        )
    }
}

fn validate_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, CoreError> {
    let date = parse_appointment_date(raw).map_err(|_| CoreError::InvalidDate)?;
    ensure_future_date(today, date)
}

fn validate_description(raw: &str) -> Result<String, CoreError> {
    ensure_max_len(raw, MAX_DESCRIPTION_LEN, CoreError::InvalidDescription)?;
    Ok(raw.to_string())
}

use crate::repo::{provided, Record, Repository};
use chrono::NaiveDate;
use docket_core::domain::{Appointment, AppointmentId};
use docket_core::CoreError;

pub type AppointmentsRepo = Repository<Appointment>;

#[derive(Debug, Clone, Default)]
pub struct AppointmentUpdate {
    /// `DD-Mon-YY`, validated against the repository clock.
    pub date: Option<String>,
    pub description: Option<String>,
}

impl Record for Appointment {
    type Id = AppointmentId;
    type Update = AppointmentUpdate;

    const KIND: &'static str = "appointment";

    fn id(&self) -> &AppointmentId {
        Appointment::id(self)
    }

    fn apply(&mut self, update: AppointmentUpdate, today: NaiveDate) -> Result<(), CoreError> {
        if let Some(date) = provided(&update.date) {
            self.set_date(date, today)?;
        }
        if let Some(description) = provided(&update.description) {
            self.set_description(description)?;
        }
        Ok(())
    }
}

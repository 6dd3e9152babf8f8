pub mod error;
pub mod repo;

use chrono::NaiveDate;
use docket_core::{Clock, SystemClock};
use std::sync::Arc;

pub use error::{ErrorClass, Result, StoreError, StoreErrorKind};
pub use repo::{
    AppointmentUpdate, AppointmentsRepo, ContactUpdate, ContactsRepo, Record, Repository,
    TaskUpdate, TasksRepo,
};

/// One repository per record kind, sharing a single clock.
#[derive(Debug)]
pub struct Store {
    clock: Arc<dyn Clock>,
    appointments: AppointmentsRepo,
    contacts: ContactsRepo,
    tasks: TasksRepo,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::default()))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            appointments: Repository::with_clock(Arc::clone(&clock)),
            contacts: Repository::with_clock(Arc::clone(&clock)),
            tasks: Repository::with_clock(Arc::clone(&clock)),
            clock,
        }
    }

    /// The day appointment dates must lie after.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn appointments(&self) -> &AppointmentsRepo {
        &self.appointments
    }

    pub fn appointments_mut(&mut self) -> &mut AppointmentsRepo {
        &mut self.appointments
    }

    pub fn contacts(&self) -> &ContactsRepo {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut ContactsRepo {
        &mut self.contacts
    }

    pub fn tasks(&self) -> &TasksRepo {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TasksRepo {
        &mut self.tasks
    }
}

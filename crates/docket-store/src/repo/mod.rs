pub mod appointments;
pub mod contacts;
pub mod tasks;

pub use appointments::{AppointmentUpdate, AppointmentsRepo};
pub use contacts::{ContactUpdate, ContactsRepo};
pub use tasks::{TaskUpdate, TasksRepo};

use crate::error::{Result, StoreError};
use chrono::NaiveDate;
use docket_core::{Clock, CoreError, SystemClock};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

/// A validated record that can live in a [`Repository`].
pub trait Record: Clone + fmt::Debug {
    type Id: Clone + Eq + Hash + Borrow<str> + fmt::Display + fmt::Debug;
    /// Partial field update; absent fields are left as they are.
    type Update;

    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// Runs the setter for every provided field, in declaration order.
    fn apply(
        &mut self,
        update: Self::Update,
        today: NaiveDate,
    ) -> std::result::Result<(), CoreError>;
}

/// In-memory keyed collection of one record kind.
///
/// Not internally synchronized; share it behind a lock.
#[derive(Debug)]
pub struct Repository<R: Record> {
    records: HashMap<R::Id, R>,
    clock: Arc<dyn Clock>,
}

impl<R: Record> Default for Repository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Repository<R> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::default()))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: HashMap::new(),
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add(&mut self, record: R) -> Result<()> {
        if self.records.contains_key(Borrow::<str>::borrow(record.id())) {
            debug!(kind = R::KIND, id = %record.id(), "add rejected: duplicate id");
            return Err(StoreError::DuplicateId {
                kind: R::KIND,
                id: record.id().to_string(),
            });
        }

        debug!(kind = R::KIND, id = %record.id(), "record added");
        self.records.insert(record.id().clone(), record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut R> {
        self.records.get_mut(id)
    }

    /// Like [`Repository::get`], but a missing id is a not-found error.
    pub fn require(&self, id: &str) -> Result<&R> {
        self.records.get(id).ok_or_else(|| StoreError::NotFound {
            kind: R::KIND,
            id: id.to_string(),
        })
    }

    /// Snapshot of the stored records in unspecified order.
    pub fn list(&self) -> Vec<&R> {
        self.records.values().collect()
    }

    /// Applies `update` to the record under `id`. The stored record changes
    /// only if every provided field validates.
    pub fn update(&mut self, id: &str, update: R::Update) -> Result<()> {
        let today = self.clock.today();
        let Some(current) = self.records.get_mut(id) else {
            debug!(kind = R::KIND, id, "update rejected: unknown id");
            return Err(unknown_id::<R>(id));
        };

        let mut next = current.clone();
        next.apply(update, today)?;
        *current = next;
        debug!(kind = R::KIND, id, "record updated");
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        if self.records.remove(id).is_none() {
            debug!(kind = R::KIND, id, "delete rejected: unknown id");
            return Err(unknown_id::<R>(id));
        }

        debug!(kind = R::KIND, id, "record deleted");
        Ok(())
    }

    pub fn exists(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn unknown_id<R: Record>(id: &str) -> StoreError {
    StoreError::UnknownId {
        kind: R::KIND,
        id: id.to_string(),
    }
}

/// `None` and empty strings both mean "leave the field alone".
pub(crate) fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

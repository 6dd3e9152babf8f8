use crate::repo::{provided, Record, Repository};
use chrono::NaiveDate;
use docket_core::domain::{Contact, ContactId};
use docket_core::CoreError;

pub type ContactsRepo = Repository<Contact>;

#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Record for Contact {
    type Id = ContactId;
    type Update = ContactUpdate;

    const KIND: &'static str = "contact";

    fn id(&self) -> &ContactId {
        Contact::id(self)
    }

    fn apply(&mut self, update: ContactUpdate, _today: NaiveDate) -> Result<(), CoreError> {
        if let Some(first_name) = provided(&update.first_name) {
            self.set_first_name(first_name)?;
        }
        if let Some(last_name) = provided(&update.last_name) {
            self.set_last_name(last_name)?;
        }
        if let Some(phone) = provided(&update.phone) {
            self.set_phone(phone)?;
        }
        if let Some(address) = provided(&update.address) {
            self.set_address(address)?;
        }
        Ok(())
    }
}

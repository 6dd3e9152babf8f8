use crate::domain::ids::ContactId;
use crate::domain::phone::normalize_phone;
use crate::error::CoreError;
use crate::rules::validation::{ensure_max_len, MAX_ADDRESS_LEN, MAX_NAME_LEN};
use serde::Serialize;

/// Person record. `phone` is always stored as `###-###-####`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone: String,
    address: String,
}

impl Contact {
    pub fn new(
        id: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
        address: &str,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id: ContactId::new(id)?,
            first_name: validate_name(first_name, CoreError::InvalidFirstName)?,
            last_name: validate_name(last_name, CoreError::InvalidLastName)?,
            phone: normalize_phone(phone)?,
            address: validate_address(address)?,
        })
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_first_name(&mut self, first_name: &str) -> Result<(), CoreError> {
        self.first_name = validate_name(first_name, CoreError::InvalidFirstName)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: &str) -> Result<(), CoreError> {
        self.last_name = validate_name(last_name, CoreError::InvalidLastName)?;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: &str) -> Result<(), CoreError> {
        self.phone = normalize_phone(phone)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: &str) -> Result<(), CoreError> {
        self.address = validate_address(address)?;
        Ok(())
    }
}

fn validate_name(raw: &str, err: CoreError) -> Result<String, CoreError> {
    ensure_max_len(raw, MAX_NAME_LEN, err)?;
    Ok(raw.to_string())
}

fn validate_address(raw: &str) -> Result<String, CoreError> {
    ensure_max_len(raw, MAX_ADDRESS_LEN, CoreError::InvalidAddress)?;
    Ok(raw.to_string())
}

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid appointment id")]
    InvalidAppointmentId,
    #[error("invalid contact id")]
    InvalidContactId,
    #[error("invalid task id")]
    InvalidTaskId,
    #[error("invalid date")]
    InvalidDate,
    #[error("invalid description")]
    InvalidDescription,
    #[error("invalid name")]
    InvalidName,
    #[error("invalid first name")]
    InvalidFirstName,
    #[error("invalid last name")]
    InvalidLastName,
    #[error("invalid phone number")]
    InvalidPhone,
    #[error("invalid address")]
    InvalidAddress,
}

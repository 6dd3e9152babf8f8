pub mod appointment;
pub mod contact;
pub mod ids;
pub mod phone;
pub mod task;

pub use appointment::Appointment;
pub use contact::Contact;
pub use ids::{AppointmentId, ContactId, TaskId};
pub use phone::{is_formatted_phone, normalize_phone};
pub use task::Task;

use crate::domain::ids::TaskId;
use crate::error::CoreError;
use crate::rules::validation::{ensure_max_len, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: String,
}

impl Task {
    pub fn new(id: &str, name: &str, description: &str) -> Result<Self, CoreError> {
        Ok(Self {
            id: TaskId::new(id)?,
            name: validate_name(name)?,
            description: validate_description(description)?,
        })
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), CoreError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), CoreError> {
        self.description = validate_description(description)?;
        Ok(())
    }
}

fn validate_name(raw: &str) -> Result<String, CoreError> {
    ensure_max_len(raw, MAX_NAME_LEN, CoreError::InvalidName)?;
    Ok(raw.to_string())
}

fn validate_description(raw: &str) -> Result<String, CoreError> {
    ensure_max_len(raw, MAX_DESCRIPTION_LEN, CoreError::InvalidDescription)?;
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::Task;
    use crate::error::CoreError;

    #[test]
    fn new_accepts_boundary_lengths() {
        let description = "d".repeat(50);
        let task = Task::new("1234567890", "ABCDEFGHIJ", &description).unwrap();
        assert_eq!(task.id().as_str(), "1234567890");
        assert_eq!(task.name(), "ABCDEFGHIJ");
        assert_eq!(task.description(), description);
    }

    #[test]
    fn new_rejects_each_oversized_field() {
        assert_eq!(
            Task::new("12345678901", "Name", "Desc").unwrap_err(),
            CoreError::InvalidTaskId
        );
        assert_eq!(
            Task::new("001", "ABCDEFGHIJK", "Desc").unwrap_err(),
            CoreError::InvalidName
        );
        assert_eq!(
            Task::new("001", "Name", &"d".repeat(51)).unwrap_err(),
            CoreError::InvalidDescription
        );
    }

    #[test]
    fn setters_keep_previous_value_on_failure() {
        let mut task = Task::new("001", "Dishes", "Load the dishwasher").unwrap();
        task.set_name("Laundry").unwrap();
        task.set_description("Fold the towels").unwrap();

        assert!(task.set_name("ABCDEFGHIJK").is_err());
        assert!(task.set_description(&"d".repeat(51)).is_err());
        assert_eq!(task.name(), "Laundry");
        assert_eq!(task.description(), "Fold the towels");
    }

    #[test]
    fn empty_values_are_valid() {
        let task = Task::new("", "", "").unwrap();
        assert_eq!(task.id().as_str(), "");
        assert_eq!(task.name(), "");
    }
}

use crate::repo::{provided, Record, Repository};
use chrono::NaiveDate;
use docket_core::domain::{Task, TaskId};
use docket_core::CoreError;

pub type TasksRepo = Repository<Task>;

#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Record for Task {
    type Id = TaskId;
    type Update = TaskUpdate;

    const KIND: &'static str = "task";

    fn id(&self) -> &TaskId {
        Task::id(self)
    }

    fn apply(&mut self, update: TaskUpdate, _today: NaiveDate) -> Result<(), CoreError> {
        if let Some(name) = provided(&update.name) {
            self.set_name(name)?;
        }
        if let Some(description) = provided(&update.description) {
            self.set_description(description)?;
        }
        Ok(())
    }
}

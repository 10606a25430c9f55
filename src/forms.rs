use tracing::info;

use crate::model::Employee;

/// Immutable snapshot of the create form's fields at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFormValue {
    pub name: String,
    pub position: String,
}

/// The new-employee form: two text fields, both empty by default.
///
/// Submitting only reports the field values; nothing is ever sent to the
/// directory service, so the remote list is unaffected. That gap is
/// inherited from the reference behavior and is deliberately kept.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub position: String,
}

impl EmployeeForm {
    pub fn new() -> Self {
        EmployeeForm::default()
    }

    /// Snapshot the current field values and report them to the log.
    pub fn submit(&self) -> EmployeeFormValue {
        let value = EmployeeFormValue {
            name: self.name.clone(),
            position: self.position.clone(),
        };
        info!(name = %value.name, position = %value.position, "form submitted");
        value
    }
}

/// The task-attachment form: one text field, applied to an employee the
/// form borrows but does not own.
#[derive(Debug, Default)]
pub struct TaskForm {
    pub task: String,
}

impl TaskForm {
    pub fn new() -> Self {
        TaskForm::default()
    }

    /// Append the current task text to the employee's task list.
    ///
    /// An empty field is a no-op: nothing is appended and the field is
    /// not cleared. Otherwise the employee's `tasks` is initialized to an
    /// empty list if absent, the text is pushed at the end, and the field
    /// resets to empty. Returns whether a task was appended.
    pub fn submit(&mut self, employee: &mut Employee) -> bool {
        if self.task.is_empty() {
            return false;
        }
        let task = std::mem::take(&mut self.task);
        info!(employee = %employee.name, task = %task, "task added");
        employee.tasks.get_or_insert_with(Vec::new).push(task);
        true
    }
}

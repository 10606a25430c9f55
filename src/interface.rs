use anyhow::{Context, Result};
use prettytable::Table;
use tracing::warn;

use crate::forms::{EmployeeForm, TaskForm};
use crate::model::Employee;
use crate::service::Directory;

/// The list view. Holds the rows currently on display; a fresh view
/// displays nothing until it is activated.
#[derive(Default)]
pub struct EmployeeListView {
    employees: Vec<Employee>,
}

impl EmployeeListView {
    pub fn new() -> Self {
        EmployeeListView::default()
    }

    /// One-shot activation: fetch the full list and replace the displayed
    /// rows with the response, in response order. On a transport failure
    /// the rows stay as they were. The reference behavior drops the
    /// failure without a trace; here it at least lands in the log.
    pub fn activate(&mut self, directory: &dyn Directory) {
        match directory.list_employees() {
            Ok(employees) => self.employees = employees,
            Err(err) => warn!(error = %err, "employee list fetch failed"),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

/// The detail view. Binds at most one employee.
#[derive(Default)]
pub struct EmployeeDetailView {
    employee: Option<Employee>,
}

impl EmployeeDetailView {
    pub fn new() -> Self {
        EmployeeDetailView::default()
    }

    /// Convert the raw route parameter to an id and fetch that employee
    /// once. A non-numeric parameter is rejected before any request goes
    /// out. A transport failure leaves the view unbound, logged like the
    /// list view's.
    pub fn activate(&mut self, directory: &dyn Directory, route_id: &str) -> Result<()> {
        let id: i64 = route_id
            .trim()
            .parse()
            .with_context(|| format!("'{}' is not a numeric employee id", route_id))?;
        match directory.get_employee(id) {
            Ok(employee) => self.employee = Some(employee),
            Err(err) => warn!(error = %err, id, "employee fetch failed"),
        }
        Ok(())
    }

    pub fn employee(&self) -> Option<&Employee> {
        self.employee.as_ref()
    }

    pub fn employee_mut(&mut self) -> Option<&mut Employee> {
        self.employee.as_mut()
    }
}

/// List every employee the directory returns.
pub fn list(directory: &dyn Directory) -> Result<()> {
    let mut view = EmployeeListView::new();
    view.activate(directory);

    let mut table = Table::new();
    table.add_row(row!["id", "name", "position", "tasks"]);
    for employee in view.employees() {
        table.add_row(row![
            employee.id,
            employee.name,
            employee.position.as_deref().unwrap_or("-"),
            employee.tasks.as_ref().map_or(0, |tasks| tasks.len())
        ]);
    }
    table.printstd();
    Ok(())
}

/// Show a single employee by its route id.
pub fn show(directory: &dyn Directory, route_id: &str) -> Result<()> {
    let mut view = EmployeeDetailView::new();
    view.activate(directory, route_id)?;
    match view.employee() {
        Some(employee) => render_employee(employee),
        None => println!("No employee to display."),
    }
    Ok(())
}

/// Fill in and submit the new-employee form. The directory has no create
/// endpoint, so the values are reported and nothing is sent upstream.
pub fn add_employee(name: String, position: String) -> Result<()> {
    let mut form = EmployeeForm::new();
    form.name = name;
    form.position = position;

    let value = form.submit();
    println!(
        "Form submitted: name={:?}, position={:?}",
        value.name, value.position
    );
    println!("Note: the remote directory is read-only; the employee was not created there.");
    Ok(())
}

/// Fetch an employee, attach a task to it in memory, and show the result.
/// The attachment lives only for this run.
pub fn add_task(directory: &dyn Directory, route_id: &str, task: String) -> Result<()> {
    let mut view = EmployeeDetailView::new();
    view.activate(directory, route_id)?;

    let employee = match view.employee_mut() {
        Some(employee) => employee,
        None => {
            println!("No employee to display.");
            return Ok(());
        }
    };

    let mut form = TaskForm::new();
    form.task = task;
    if form.submit(employee) {
        render_employee(employee);
    } else {
        println!("Empty task, nothing added.");
    }
    Ok(())
}

fn render_employee(employee: &Employee) {
    let mut table = Table::new();
    table.add_row(row!["id", employee.id]);
    table.add_row(row!["name", employee.name]);
    table.add_row(row![
        "position",
        employee.position.as_deref().unwrap_or("-")
    ]);
    let tasks = match &employee.tasks {
        Some(tasks) if !tasks.is_empty() => tasks
            .iter()
            .map(|task| textwrap::fill(task, 60))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => "-".to_string(),
    };
    table.add_row(row!["tasks", tasks]);
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::{EmployeeDetailView, EmployeeListView};
    use crate::model::Employee;
    use crate::service::{Directory, TransportError};
    use std::cell::RefCell;

    struct FakeDirectory {
        employees: Vec<Employee>,
        fail: bool,
        requested_ids: RefCell<Vec<i64>>,
    }

    impl FakeDirectory {
        fn with(employees: Vec<Employee>) -> Self {
            FakeDirectory {
                employees,
                fail: false,
                requested_ids: RefCell::new(Vec::new()),
            }
        }
    }

    impl Directory for FakeDirectory {
        fn list_employees(&self) -> Result<Vec<Employee>, TransportError> {
            if self.fail {
                return Err(TransportError::simulated("connection refused"));
            }
            Ok(self.employees.clone())
        }

        fn get_employee(&self, id: i64) -> Result<Employee, TransportError> {
            self.requested_ids.borrow_mut().push(id);
            if self.fail {
                return Err(TransportError::simulated("connection refused"));
            }
            self.employees
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| TransportError::simulated("404 Not Found"))
        }
    }

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            position: None,
            tasks: None,
        }
    }

    #[test]
    fn list_view_displays_response_in_response_order() {
        let directory =
            FakeDirectory::with(vec![employee(2, "Ervin"), employee(1, "Leanne")]);
        let mut view = EmployeeListView::new();
        view.activate(&directory);

        let names: Vec<&str> = view.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ervin", "Leanne"]);
    }

    #[test]
    fn list_view_shows_one_row_for_one_employee() {
        let directory = FakeDirectory::with(vec![employee(1, "Leanne")]);
        let mut view = EmployeeListView::new();
        view.activate(&directory);

        assert_eq!(view.employees().len(), 1);
        assert_eq!(view.employees()[0].name, "Leanne");
        assert!(view.employees()[0].position.is_none());
    }

    #[test]
    fn list_view_stays_empty_when_first_fetch_fails() {
        let mut directory = FakeDirectory::with(vec![employee(1, "Leanne")]);
        directory.fail = true;
        let mut view = EmployeeListView::new();
        view.activate(&directory);

        assert!(view.employees().is_empty());
    }

    #[test]
    fn list_view_keeps_previous_rows_when_refetch_fails() {
        let mut directory = FakeDirectory::with(vec![employee(1, "Leanne")]);
        let mut view = EmployeeListView::new();
        view.activate(&directory);
        assert_eq!(view.employees().len(), 1);

        directory.fail = true;
        view.activate(&directory);
        assert_eq!(view.employees().len(), 1);
        assert_eq!(view.employees()[0].name, "Leanne");
    }

    #[test]
    fn detail_view_requests_the_routed_id() {
        let directory = FakeDirectory::with(vec![employee(2, "Ervin")]);
        let mut view = EmployeeDetailView::new();
        view.activate(&directory, "2").unwrap();

        assert_eq!(*directory.requested_ids.borrow(), vec![2]);
        assert_eq!(view.employee().unwrap().name, "Ervin");
    }

    #[test]
    fn detail_view_rejects_non_numeric_route_id_before_any_request() {
        let directory = FakeDirectory::with(vec![employee(2, "Ervin")]);
        let mut view = EmployeeDetailView::new();

        assert!(view.activate(&directory, "abc").is_err());
        assert!(directory.requested_ids.borrow().is_empty());
        assert!(view.employee().is_none());
    }

    #[test]
    fn detail_view_stays_unbound_on_transport_failure() {
        let mut directory = FakeDirectory::with(vec![employee(2, "Ervin")]);
        directory.fail = true;
        let mut view = EmployeeDetailView::new();
        view.activate(&directory, "2").unwrap();

        assert!(view.employee().is_none());
    }
}

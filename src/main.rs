#[macro_use] extern crate prettytable;

use structopt::StructOpt;

mod cli;
mod forms;
mod interface;
mod model;
mod service;

use cli::{Command::*, CommandLineArgs};
use service::{EmployeeService, DEFAULT_BASE_URL};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    // Get the command-line arguments.
    let CommandLineArgs { action, base_url } = CommandLineArgs::from_args();

    // One service per process, handed by reference to each view.
    let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let service = EmployeeService::new(base_url);

    // Perform the action.
    match action {
        List => interface::list(&service),
        Show { id } => interface::show(&service, &id),
        Add { name, position } => interface::add_employee(name, position),
        AddTask { id, task } => interface::add_task(&service, &id, task),
    }?;
    Ok(())
}

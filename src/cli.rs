use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub enum Command {
    /// List every employee in the directory.
    List,
    /// Show one employee by id.
    Show {
        /// The employee id as it appears in the directory.
        #[structopt()]
        id: String,
    },
    /// Fill in the new-employee form and submit it. The remote directory
    /// is read-only, so the values are reported but never sent upstream.
    Add {
        /// The new employee's name.
        #[structopt(long, default_value = "")]
        name: String,

        /// The new employee's position.
        #[structopt(long, default_value = "")]
        position: String,
    },
    /// Attach a free-text task to an employee for the rest of the run.
    AddTask {
        /// The employee id as it appears in the directory.
        #[structopt()]
        id: String,

        /// The task text.
        #[structopt()]
        task: String,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Staffdir",
    about = "A minimal employee directory for the terminal."
)]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Command,

    /// Use a different directory endpoint.
    #[structopt(short, long)]
    pub base_url: Option<String>,
}

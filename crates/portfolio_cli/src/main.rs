//! Command-line front end for the portfolio data layer.
//!
//! # Responsibility
//! - Initialize both stores on startup, as the site does per process.
//! - Translate store results into user-facing messages and exit codes.
//! - Own the contact form checks that do not belong to storage (password
//!   confirmation and minimum length).

mod form;

use clap::{Parser, Subcommand};
use log::error;
use portfolio_core::{
    init_logging, ContactStore, LogLevel, LogSettings, ProjectStore, RepoError, StorageConfig,
};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_STORAGE_FAILURE: u8 = 1;
const EXIT_REJECTED_INPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "portfolio",
    version = portfolio_core::core_version(),
    about = "Manage portfolio projects and contact submissions"
)]
struct Cli {
    /// Directory for the database files (defaults to PORTFOLIO_DATA_DIR or the
    /// working directory).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Showcase projects.
    #[command(subcommand)]
    Projects(ProjectCommand),
    /// Contact submissions.
    #[command(subcommand)]
    Contacts(ContactCommand),
}

#[derive(Debug, Subcommand)]
enum ProjectCommand {
    List {
        #[arg(long)]
        json: bool,
    },
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "image", default_value = "")]
        image_file_name: String,
    },
}

#[derive(Debug, Subcommand)]
enum ContactCommand {
    List {
        #[arg(long)]
        json: bool,
    },
    Count,
    Add(form::ContactForm),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.unwrap_or_else(LogLevel::build_default);
        let started = LogSettings::new(level, log_dir).and_then(|settings| init_logging(&settings));
        if let Err(err) = started {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let mut config = StorageConfig::from_env();
    if let Some(data_dir) = cli.data_dir.clone() {
        config.preferred_dir = data_dir;
    }

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => failure.report(),
    }
}

fn run(command: Command, config: &StorageConfig) -> Result<(), Failure> {
    let projects = ProjectStore::from_config(config);
    let contacts = ContactStore::from_config(config);
    projects.initialize()?;
    contacts.initialize()?;

    match command {
        Command::Projects(ProjectCommand::List { json }) => {
            let rows = projects.list_all()?;
            if json {
                print_json(&rows)?;
            } else if rows.is_empty() {
                println!("no projects yet");
            } else {
                for project in &rows {
                    println!(
                        "#{} {} [{}]\n    {}",
                        project.id, project.title, project.image_file_name, project.description
                    );
                }
            }
        }
        Command::Projects(ProjectCommand::Add {
            title,
            description,
            image_file_name,
        }) => {
            let id = projects.insert(&title, &description, &image_file_name)?;
            println!("Project added successfully (id {id}).");
        }
        Command::Contacts(ContactCommand::List { json }) => {
            let rows = contacts.list_all()?;
            if json {
                print_json(&rows)?;
            } else {
                for contact in &rows {
                    println!(
                        "#{} {} {} <{}> at {}",
                        contact.id,
                        contact.first_name,
                        contact.last_name,
                        contact.email,
                        contact.created_at
                    );
                }
            }
        }
        Command::Contacts(ContactCommand::Count) => {
            println!("{}", contacts.count()?);
        }
        Command::Contacts(ContactCommand::Add(contact_form)) => {
            let submission = contact_form.check().map_err(Failure::Rejected)?;
            contacts.insert_new(&submission)?;
            println!("Thank you for your message! Your information has been saved.");
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(rows: &T) -> Result<(), Failure> {
    let rendered =
        serde_json::to_string_pretty(rows).map_err(|err| Failure::Output(err.to_string()))?;
    println!("{rendered}");
    Ok(())
}

#[derive(Debug)]
enum Failure {
    Rejected(String),
    Storage(RepoError),
    Output(String),
}

impl Failure {
    fn exit_status(&self) -> u8 {
        match self {
            Self::Rejected(_) => EXIT_REJECTED_INPUT,
            Self::Storage(_) | Self::Output(_) => EXIT_STORAGE_FAILURE,
        }
    }

    fn report(self) -> ExitCode {
        let status = self.exit_status();
        match self {
            Self::Rejected(message) => eprintln!("{message}"),
            Self::Storage(err) => {
                error!("event=cli_command module=cli status=error error={err}");
                eprintln!("Something went wrong while saving or loading data. Please try again.");
            }
            Self::Output(message) => eprintln!("failed to render output: {message}"),
        }
        ExitCode::from(status)
    }
}

impl From<RepoError> for Failure {
    fn from(value: RepoError) -> Self {
        if value.is_validation() {
            return Self::Rejected(value.to_string());
        }
        Self::Storage(value)
    }
}

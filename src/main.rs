use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::{
    models::project::Project,
    services::projects::ProjectRepository,
    storage::{json::JsonFileStorage, memory::MemoryStorage},
};

mod clock;
mod models;
mod services;
mod storage;
mod ui;
mod web;

#[derive(Debug, Parser)]
#[command(
    name = "data-management",
    version,
    about = "Keep track of your projects from the browser or the terminal"
)]
struct Cli {
    /// Directory holding the project catalog and one directory per project
    #[arg(long, global = true, env = "DATA_MANAGEMENT_DIR", default_value = "data/projects")]
    data_dir: PathBuf,

    /// Where projects are kept
    #[arg(
        long,
        global = true,
        env = "DATA_MANAGEMENT_STORAGE",
        value_enum,
        default_value_t = StorageKind::Json
    )]
    storage: StorageKind,

    /// Address the web server listens on
    #[arg(long, global = true, env = "DATA_MANAGEMENT_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Web server port
    #[arg(short, long, global = true, env = "DATA_MANAGEMENT_PORT", default_value_t = 8080)]
    port: u16,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StorageKind {
    /// A JSON catalog file inside the data directory
    Json,
    /// Process memory, lost on exit
    Memory,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve,

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommands),
}

#[derive(Debug, Subcommand)]
enum ProjectCommands {
    /// Create a new project
    New {
        name: String,

        /// Add a description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Delete a project and its directory
    Delete { name: String },
    /// List all projects, oldest first
    List,
    /// View a project
    View { name: String },
}

/// `RUST_LOG` wins over `default_level`. Logs go to stderr so CLI output stays clean.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_repository(kind: StorageKind, data_dir: PathBuf) -> ProjectRepository {
    match kind {
        StorageKind::Memory => ProjectRepository::new(MemoryStorage::new()),
        StorageKind::Json => match JsonFileStorage::open(data_dir) {
            Ok(storage) => {
                tracing::info!(path = %storage.base_dir().display(), "Opened project storage");
                ProjectRepository::new(storage)
            }
            Err(e) => {
                eprintln!("Error: Failed to open data directory: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn run_project_command(repository: &ProjectRepository, command: ProjectCommands) {
    let result = match command {
        ProjectCommands::New { name, description } => repository
            .save(Project::new(name, description))
            .map(|project| ui::render_success(&format!("Created project '{}'", project.name))),
        ProjectCommands::Delete { name } => repository
            .delete(&name)
            .map(|project| ui::render_success(&format!("Deleted project '{}'", project.name))),
        ProjectCommands::List => repository.all().map(|projects| {
            if projects.is_empty() {
                println!("No projects found");
            } else {
                ui::render_view_header("PROJECTS", projects.len());
                for project in &projects {
                    ui::render_project_line(project);
                }
            }
        }),
        ProjectCommands::View { name } => repository
            .get(&name)
            .map(|project| ui::render_project_details(&project)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

impl Cli {
    /// No subcommand means `serve`.
    fn wants_server(&self) -> bool {
        matches!(self.command, Some(Commands::Serve) | None)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(if cli.wants_server() { "info" } else { "warn" });

    let repository = open_repository(cli.storage, cli.data_dir);

    match cli.command {
        Some(Commands::Project(command)) => run_project_command(&repository, command),
        Some(Commands::Serve) | None => serve(repository, &cli.host, cli.port),
    }
}

fn serve(repository: ProjectRepository, host: &str, port: u16) {
    let result = actix_web::rt::System::new().block_on(web::serve(repository, host, port));
    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

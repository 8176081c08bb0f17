use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use userdir::cli::{handle_log_command, handle_user_command, LogCommands, UserCommands};
use userdir::config::{paths::DirectoryPaths, settings::Settings};
use userdir::storage::{initialize_storage, Storage};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "USERDIR_LOG";

#[derive(Parser)]
#[command(
    name = "userdir",
    version,
    about = "User directory with a field-level audit trail",
    long_about = "userdir keeps a small directory of people and records every \
                  creation, deletion and field edit as an audit entry that can \
                  be listed or exported."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the directory and load the demo roster
    Init,

    /// Show current configuration and paths
    Config,

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Audit log commands
    #[command(subcommand, alias = "logs")]
    Log(LogCommands),
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = DirectoryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing userdir at: {}", paths.base_dir().display());
            let seeded = initialize_storage(&paths, &settings)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if seeded > 0 {
                println!("Loaded {} demo users.", seeded);
                println!();
                println!("Run 'userdir user list' to see them.");
            }
        }
        Some(Commands::Config) => {
            println!("userdir Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Users:            {}", storage.users.count()?);
            println!("Log entries:      {}", storage.logs.count()?);
            println!();
            println!("Settings:");
            println!("  Seed on init:     {}", settings.seed_on_init);
            println!("  Log level:        {}", settings.log_level);
            println!("  Timestamp format: {}", settings.timestamp_format);
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, cmd)?;
        }
        Some(Commands::Log(cmd)) => {
            handle_log_command(&storage, &settings, cmd)?;
        }
        None => {
            println!("userdir - User directory with a field-level audit trail");
            println!();
            println!("Run 'userdir --help' for usage information.");
            println!("Run 'userdir init' to create the directory.");
        }
    }

    Ok(())
}

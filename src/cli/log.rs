//! Audit log CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_log_list;
use crate::error::{DirectoryError, DirectoryResult};
use crate::export::{export_logs, ExportFormat};
use crate::models::UserId;
use crate::services::{AuditLogService, UserService};
use crate::storage::Storage;

/// Log subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// List change logs, newest first
    List {
        /// Only entries for this user ID
        #[arg(short, long)]
        user: Option<UserId>,
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Export change logs
    Export {
        #[arg(short, long, value_enum)]
        format: ExportFormat,
        /// Output file (stdout if omitted); a bare file name goes to the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only entries for this user ID
        #[arg(short, long)]
        user: Option<UserId>,
    },
}

/// Handle a log command
pub fn handle_log_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LogCommands,
) -> DirectoryResult<()> {
    let service = AuditLogService::new(storage);

    match cmd {
        LogCommands::List { user, limit } => {
            let (title, mut entries) = match user {
                Some(user_id) => {
                    // Entries outlive their user, so fall back to the snapshot name
                    let name = match UserService::new(storage).get(user_id)? {
                        Some(u) => u.full_name(),
                        None => format!("user {}", user_id),
                    };
                    (
                        format!("Change logs for {}", name),
                        service.get_logs_for_user(user_id)?,
                    )
                }
                None => ("All change logs".to_string(), service.get_all_logs()?),
            };

            if let Some(limit) = limit {
                entries.truncate(limit);
            }

            println!("{}", format_log_list(&title, &entries, &settings.timestamp_format));
        }

        LogCommands::Export {
            format,
            output,
            user,
        } => {
            let entries = match user {
                Some(user_id) => service.get_logs_for_user(user_id)?,
                None => service.get_all_logs()?,
            };
            let count = entries.len();

            match output.map(|path| resolve_output(storage, path)) {
                Some(path) => {
                    let file = File::create(&path).map_err(|e| {
                        DirectoryError::Export(format!(
                            "Failed to create {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                    let mut writer = BufWriter::new(file);
                    export_logs(format, entries, user, &mut writer)?;
                    writer.flush()?;

                    println!(
                        "Exported {} entries as {} to {}",
                        count,
                        format.extension(),
                        path.display()
                    );
                }
                None => {
                    let stdout = io::stdout();
                    let mut writer = stdout.lock();
                    export_logs(format, entries, user, &mut writer)?;
                    writer.flush()?;
                }
            }
        }
    }

    Ok(())
}

/// Bare file names land in the export directory; other paths are used as given
fn resolve_output(storage: &Storage, path: PathBuf) -> PathBuf {
    let bare = path.parent().is_some_and(|p| p.as_os_str().is_empty());
    match storage.paths() {
        Some(paths) if bare => paths.export_dir().join(path),
        _ => path,
    }
}

//! User CLI commands
//!
//! Implements CLI commands for directory management.

use clap::Subcommand;

use crate::display::{format_user_details, format_user_list};
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{User, UserId};
use crate::services::{AuditLogService, UserService};
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List users
    List {
        /// Only active users
        #[arg(long, conflicts_with = "inactive")]
        active: bool,
        /// Only inactive users
        #[arg(long)]
        inactive: bool,
    },
    /// Show user details
    Show {
        /// User ID
        id: UserId,
    },
    /// Add a user
    Add {
        forename: String,
        surname: String,
        /// Date of birth, stored as given
        #[arg(short, long, default_value = "")]
        dob: String,
        #[arg(short, long)]
        email: String,
        /// Create the user as inactive
        #[arg(long)]
        inactive: bool,
    },
    /// Edit a user; unspecified fields keep their stored values
    Edit {
        /// User ID
        id: UserId,
        #[arg(long)]
        forename: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Set the active flag (true or false)
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: UserId,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a user command
pub fn handle_user_command(storage: &Storage, cmd: UserCommands) -> DirectoryResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::List { active, inactive } => {
            let users = if active {
                service.filter_by_active(true)?
            } else if inactive {
                service.filter_by_active(false)?
            } else {
                service.get_all()?
            };

            println!("{}", format_user_list(&users));
        }

        UserCommands::Show { id } => {
            let user = service
                .get(id)?
                .ok_or_else(|| DirectoryError::user_not_found(id.to_string()))?;

            print!("{}", format_user_details(&user));

            let history = AuditLogService::new(storage).get_logs_for_user(id)?;
            if !history.is_empty() {
                println!("\nRecent changes:");
                for entry in history.iter().take(5) {
                    println!("{}", entry.format_human_readable());
                }
            }
        }

        UserCommands::Add {
            forename,
            surname,
            dob,
            email,
            inactive,
        } => {
            let user = service.add(User::new(forename, surname, dob, email, !inactive))?;
            println!("Added user: {} (ID: {})", user.full_name(), user.id);
        }

        UserCommands::Edit {
            id,
            forename,
            surname,
            dob,
            email,
            active,
        } => {
            let Some(current) = service.get(id)? else {
                println!("No user with ID {}; nothing changed.", id);
                return Ok(());
            };

            let mut changes = current.clone();
            if let Some(forename) = forename {
                changes.forename = forename;
            }
            if let Some(surname) = surname {
                changes.surname = surname;
            }
            if let Some(dob) = dob {
                changes.date_of_birth = dob;
            }
            if let Some(email) = email {
                changes.email = email;
            }
            if let Some(active) = active {
                changes.is_active = active;
            }

            if changes == current {
                println!("No changes for {}.", current.full_name());
                return Ok(());
            }

            match service.update(id, &changes)? {
                Some(updated) => {
                    println!("Updated user: {} (ID: {})", updated.full_name(), updated.id)
                }
                None => println!("No user with ID {}; nothing changed.", id),
            }
        }

        UserCommands::Delete { id, force } => {
            let Some(user) = service.get(id)? else {
                println!("No user with ID {}; nothing deleted.", id);
                return Ok(());
            };

            if !force {
                println!("About to delete user: {} ({})", user.full_name(), user.email);
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            match service.delete(id)? {
                Some(deleted) => println!("Deleted user: {}", deleted.full_name()),
                None => println!("No user with ID {}; nothing deleted.", id),
            }
        }
    }

    Ok(())
}

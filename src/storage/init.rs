//! Storage initialization
//!
//! Handles first-run setup and the demo roster.

use crate::config::{DirectoryPaths, Settings};
use crate::error::DirectoryError;
use crate::models::User;

use super::repository::Repository;

/// The demo roster loaded into a fresh directory
pub fn seed_users() -> Vec<User> {
    [
        ("Peter", "Loew", "01/01/2000", "ploew@example.com", true),
        ("Benjamin Franklin", "Gates", "02/01/2000", "bfgates@example.com", true),
        ("Castor", "Troy", "03/01/2000", "ctroy@example.com", false),
        ("Memphis", "Raines", "04/01/2000", "mraines@example.com", true),
        ("Stanley", "Goodspeed", "05/01/2000", "sgodspeed@example.com", true),
        ("H.I.", "McDunnough", "06/01/2000", "himcdunnough@example.com", true),
        ("Cameron", "Poe", "07/01/2000", "cpoe@example.com", false),
        ("Edward", "Malus", "08/01/2000", "emalus@example.com", false),
        ("Damon", "Macready", "09/01/2000", "dmacready@example.com", false),
        ("Johnny", "Blaze", "10/01/2000", "jblaze@example.com", true),
        ("Robin", "Feld", "11/01/2000", "rfeld@example.com", true),
    ]
    .into_iter()
    .zip(1u64..)
    .map(|((forename, surname, dob, email, active), id)| {
        User::new(forename, surname, dob, email, active).with_id(id)
    })
    .collect()
}

/// Initialize storage for a fresh installation
///
/// Returns the number of users seeded. An existing users file is never
/// touched, and seeding writes no audit entries.
pub fn initialize_storage(paths: &DirectoryPaths, settings: &Settings) -> Result<usize, DirectoryError> {
    paths.ensure_directories()?;

    if !settings.seed_on_init || paths.users_file().exists() {
        return Ok(0);
    }

    let users = Repository::<User>::new(paths.users_file());
    let mut seeded = 0;
    for user in seed_users() {
        users.insert(user)?;
        seeded += 1;
    }

    tracing::info!(count = seeded, "seeded user roster");
    Ok(seeded)
}

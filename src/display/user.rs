//! User display formatting
//!
//! Formats users for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::audit::format_bool;
use crate::models::User;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Forename")]
    forename: String,
    #[tabled(rename = "Surname")]
    surname: String,
    #[tabled(rename = "Date of Birth")]
    date_of_birth: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Active")]
    active: &'static str,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.value(),
            forename: user.forename.clone(),
            surname: user.surname.clone(),
            date_of_birth: user.date_of_birth.clone(),
            email: user.email.clone(),
            active: if user.is_active { "Yes" } else { "No" },
        }
    }
}

/// Format a list of users as a table
pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }

    let mut table = Table::new(users.iter().map(UserRow::from));
    table.with(Style::sharp());

    format!("{}\nTotal: {} users\n", table, users.len())
}

/// Format a single user's details
pub fn format_user_details(user: &User) -> String {
    let mut output = String::new();

    output.push_str(&format!("User: {}\n", user.full_name()));
    output.push_str(&format!("  ID:            {}\n", user.id));
    output.push_str(&format!("  Forename:      {}\n", user.forename));
    output.push_str(&format!("  Surname:       {}\n", user.surname));
    output.push_str(&format!("  Date of Birth: {}\n", user.date_of_birth));
    output.push_str(&format!("  Email:         {}\n", user.email));
    output.push_str(&format!("  Active:        {}\n", format_bool(user.is_active)));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_users;

    #[test]
    fn test_format_user_list() {
        let output = format_user_list(&seed_users());
        assert!(output.contains("Benjamin Franklin"));
        assert!(output.contains("himcdunnough@example.com"));
        assert!(output.contains("Date of Birth"));
        assert!(output.contains("Total: 11 users"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_user_list(&[]), "No users found.");
    }

    #[test]
    fn test_format_user_details() {
        let user = User::new("Castor", "Troy", "03/01/2000", "ctroy@example.com", false).with_id(3);
        let output = format_user_details(&user);

        assert!(output.starts_with("User: Castor Troy"));
        assert!(output.contains("ID:            3"));
        assert!(output.contains("Active:        False"));
    }
}

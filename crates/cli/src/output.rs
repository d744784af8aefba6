use crate::{error::CliError, user::User};

pub fn render_list(users: &[&User]) -> String {
    if users.is_empty() {
        return "- No users found with the specified filters.".to_string();
    }
    users
        .iter()
        .map(|u| format!("- {}, {}, {}", u.name, u.age, u.is_active))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(users: &[&User]) -> Result<String, CliError> {
    serde_json::to_string_pretty(users).map_err(CliError::JsonSerialize)
}

pub fn print_users(users: &[&User], as_json: bool) -> Result<(), CliError> {
    let rendered = if as_json {
        render_json(users)?
    } else {
        render_list(users)
    };
    println!("{rendered}");
    Ok(())
}

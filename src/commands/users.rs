use crate::api::models::User;
use crate::cli::UsersCommand;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text::format_timestamp;

pub async fn run(ctx: &AppContext, command: UsersCommand) -> AppResult<()> {
    let client = ctx.client()?;

    match command {
        UsersCommand::List => {
            let users = client.list_users().await?;

            if users.is_empty() && !ctx.output.is_json() {
                return ctx.output.note("No users found.");
            }
            ctx.output.note(&format!("Users (Total: {})", users.len()))?;

            let rows = users.iter().map(user_row).collect();
            ctx.output
                .emit_table(&["ID", "Name", "Login", "Email"], rows, &users)
        }
        UsersCommand::Me => {
            let user = client.current_user().await?;
            ctx.output.emit(&describe_user(&user), &user)
        }
    }
}

fn user_row(user: &User) -> Vec<String> {
    vec![
        user.id.to_string(),
        or_placeholder(Some(user.display_name().as_str()), "(No name)"),
        or_placeholder(user.login.as_deref(), "(No login)"),
        or_placeholder(user.email.as_deref(), "(No email)"),
    ]
}

fn describe_user(user: &User) -> String {
    [
        "Current User Information".to_string(),
        "=".repeat(30),
        format!("ID: {}", user.id),
        format!("Name: {}", user.display_name()),
        format!("Login: {}", user.login.as_deref().unwrap_or("")),
        format!("Email: {}", user.email.as_deref().unwrap_or("")),
        format!("Admin: {}", user.admin),
        format!("Status: {}", user.status_name()),
        format!("Created: {}", format_timestamp(user.created_on.as_ref())),
        format!("Last login: {}", format_timestamp(user.last_login_on.as_ref())),
    ]
    .join("\n")
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_fill_placeholders() {
        let user = User {
            id: 4,
            login: Some("ann".to_string()),
            ..User::default()
        };
        assert_eq!(
            user_row(&user),
            vec!["4", "(No name)", "ann", "(No email)"]
        );
    }

    #[test]
    fn describes_locked_user() {
        let user: User = serde_json::from_str(
            r#"{"id":9,"login":"old","firstname":"Old","lastname":"Account","admin":false,
                "status":3,"created_on":"2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let text = describe_user(&user);
        assert!(text.contains("Name: Old Account"));
        assert!(text.contains("Status: Locked"));
        assert!(text.contains("Created: 2020-01-01 00:00:00"));
        assert!(text.contains("Last login: -"));
    }
}

use chrono::NaiveDate;
use tracing::info;

use crate::api::RedmineClient;
use crate::api::models::{Issue, NamedRef, NewIssue, User};
use crate::cli::IssueAddArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

use super::issues::summary_line;
use super::prompt;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub async fn run(ctx: &AppContext, args: IssueAddArgs) -> AppResult<()> {
    let client = ctx.client()?;
    let issue = submit(&client, args).await?;

    let text = format!("Issue created successfully: {}", summary_line(&issue));
    ctx.output.emit(&text, &issue)
}

/// Creates an issue. Projects, users and trackers are all fetched before
/// anything is written, so a failed lookup never leaves a half-made issue.
pub async fn submit(client: &RedmineClient, args: IssueAddArgs) -> AppResult<Issue> {
    let projects = client.list_projects().await?;
    let users = client.list_users().await?;
    let trackers = client.list_trackers().await?;

    let project = choose(&projects, args.project, "project", "--project")?;
    let tracker = choose(&trackers, args.tracker, "tracker", "--tracker")?;

    let title = match args.title.map(|title| title.trim().to_string()) {
        Some(title) => title,
        None => prompt::prompt_required("Enter issue title: ", "--title")?,
    };
    if title.is_empty() {
        return Err(AppError::InvalidInput("title is required".to_string()));
    }

    let description = match args.description {
        Some(description) => Some(description),
        None if prompt::is_interactive() => {
            Some(prompt::prompt_optional("Enter issue description: ", "--description")?)
        }
        None => None,
    }
    .filter(|description| !description.trim().is_empty());

    let start_date = validate_date(args.start_date, "--start-date")?;
    let due_date = validate_date(args.due_date, "--due-date")?;

    let assigned_to_id = match args.assignee.as_deref() {
        Some(email) => Some(resolve_assignee(client, email, &users).await?),
        None => None,
    };

    let request = NewIssue {
        project_id: project.id,
        tracker_id: Some(tracker.id),
        subject: title,
        description,
        assigned_to_id,
        parent_issue_id: args.parent,
        start_date,
        due_date,
    };

    let issue = client.create_issue(&request).await?;
    info!(issue_id = issue.id, project = %project.name, "issue created");
    Ok(issue)
}

fn choose<'a>(
    items: &'a [NamedRef],
    flag_value: Option<usize>,
    label: &str,
    flag: &str,
) -> AppResult<&'a NamedRef> {
    if items.is_empty() {
        return Err(AppError::InvalidInput(format!("no {label}s available")));
    }

    let number = match flag_value {
        Some(number) => number,
        None => {
            let names = items.iter().map(|item| item.name.clone()).collect::<Vec<_>>();
            prompt::prompt_choice(&format!("Available {label}s:"), &names, flag)?
        }
    };

    select(items, number, label)
}

/// Picks a 1-based entry from `items`.
fn select<'a>(items: &'a [NamedRef], number: usize, label: &str) -> AppResult<&'a NamedRef> {
    number
        .checked_sub(1)
        .and_then(|index| items.get(index))
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "invalid {label} number: {number} (available: 1-{})",
                items.len()
            ))
        })
}

async fn resolve_assignee(client: &RedmineClient, email: &str, users: &[User]) -> AppResult<u32> {
    let current = client.current_user().await?;
    find_user_by_email(email, &current, users)
        .ok_or_else(|| AppError::InvalidInput(format!("user with email '{email}' not found")))
}

fn find_user_by_email(email: &str, current: &User, users: &[User]) -> Option<u32> {
    let email = email.trim();
    let matches = |user: &User| {
        user.email
            .as_deref()
            .is_some_and(|mail| mail.eq_ignore_ascii_case(email))
    };

    if matches(current) {
        return Some(current.id);
    }

    users.iter().find(|user| matches(user)).map(|user| user.id)
}

fn validate_date(value: Option<String>, flag: &str) -> AppResult<Option<NaiveDate>> {
    let Some(value) = value.map(|value| value.trim().to_string()) else {
        return Ok(None);
    };
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map(Some)
        .map_err(|err| {
            AppError::InvalidInput(format!(
                "{flag} must be a valid date formatted as YYYY-MM-DD, got `{value}`: {err}"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<NamedRef> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| NamedRef {
                id: index as u32 + 10,
                name: name.to_string(),
            })
            .collect()
    }

    fn user(id: u32, email: Option<&str>) -> User {
        User {
            id,
            email: email.map(ToOwned::to_owned),
            ..User::default()
        }
    }

    #[test]
    fn selects_one_based_entries() {
        let projects = refs(&["Website", "Mobile"]);
        assert_eq!(select(&projects, 2, "project").unwrap().name, "Mobile");
        assert!(select(&projects, 0, "project").is_err());
        assert!(select(&projects, 3, "project").is_err());
    }

    #[test]
    fn choose_uses_flag_without_prompting() {
        let trackers = refs(&["Bug", "Feature"]);
        let tracker = choose(&trackers, Some(1), "tracker", "--tracker").unwrap();
        assert_eq!(tracker.id, 10);
        assert!(matches!(
            choose(&[], Some(1), "tracker", "--tracker"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn assignee_prefers_current_user_then_list() {
        let current = user(1, Some("me@example.test"));
        let users = vec![user(2, Some("ann@example.test")), user(3, None)];

        assert_eq!(find_user_by_email("ME@example.test", &current, &users), Some(1));
        assert_eq!(find_user_by_email("ann@example.test", &current, &users), Some(2));
        assert_eq!(find_user_by_email("nobody@example.test", &current, &users), None);
    }

    #[test]
    fn validates_dates() {
        assert_eq!(
            validate_date(Some("2024-06-01".to_string()), "--due-date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(
            validate_date(Some("2024-02-29".to_string()), "--due-date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(validate_date(None, "--due-date").unwrap(), None);
        assert_eq!(validate_date(Some(" ".to_string()), "--due-date").unwrap(), None);
    }

    #[test]
    fn rejects_impossible_or_misformatted_dates() {
        for value in ["2024-13-45", "2023-02-30", "2024-00-10", "06/01/2024", "tomorrow"] {
            match validate_date(Some(value.to_string()), "--start-date") {
                Err(AppError::InvalidInput(message)) => {
                    assert!(message.contains("--start-date"), "{message}");
                    assert!(message.contains(value), "{message}");
                }
                other => panic!("expected {value} to be rejected, got {other:?}"),
            }
        }
    }
}

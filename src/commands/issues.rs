use chrono::NaiveDate;
use tracing::debug;

use crate::api::RedmineClient;
use crate::api::models::{Issue, IssueFilter, IssueList, Journal};
use crate::cli::{IssueListArgs, IssueShowArgs, IssuesCommand};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::text::{format_date, format_timestamp, pagination_footer, truncate};

use super::{issue_add, issue_edit};

const SUBJECT_WIDTH: usize = 60;
const STATUS_WIDTH: usize = 12;

pub async fn run(ctx: &AppContext, command: IssuesCommand) -> AppResult<()> {
    match command {
        IssuesCommand::List(args) => list(ctx, args).await,
        IssuesCommand::Show(args) => show(ctx, args).await,
        IssuesCommand::Add(args) => issue_add::run(ctx, args).await,
        IssuesCommand::Edit(args) => issue_edit::run(ctx, args).await,
        IssuesCommand::Url(args) => {
            let profile = ctx.profile()?;
            if profile.base_url().is_empty() {
                return Err(AppError::Config(format!(
                    "Redmine URL not configured for profile '{}'. run `redmine config set-url <url>`",
                    profile.name
                )));
            }

            let url = profile.issue_url(args.id);
            ctx.output.emit(&url, &serde_json::json!({ "id": args.id, "url": url }))
        }
    }
}

async fn list(ctx: &AppContext, args: IssueListArgs) -> AppResult<()> {
    if args.limit == 0 {
        return Err(AppError::InvalidInput(
            "--limit must be greater than 0".to_string(),
        ));
    }

    let client = ctx.client()?;
    let response = fetch_issues(&client, &args).await?;

    if ctx.output.is_json() {
        return ctx.output.emit("", &response);
    }

    if response.issues.is_empty() {
        return ctx.output.note("No issues found.");
    }

    ctx.output.note(&format!("Issues (Total: {})", response.total_count))?;
    let rows = response.issues.iter().map(issue_row).collect();
    ctx.output.emit_table(
        &[
            "ID", "Status", "Priority", "Assignee", "StartDate", "DueDate", "UpdatedAt", "Subject",
        ],
        rows,
        &response,
    )?;

    if let Some(footer) = pagination_footer(
        response.offset,
        response.issues.len(),
        response.total_count,
        "issues",
    ) {
        ctx.output.note(&footer)?;
    }

    Ok(())
}

/// Runs the list query. `--me` first resolves the API key's owner and filters on it as assignee.
pub async fn fetch_issues(client: &RedmineClient, args: &IssueListArgs) -> AppResult<IssueList> {
    let mut filter = build_filter(args);
    if args.me {
        let me = client.current_user().await?;
        debug!(user_id = me.id, "filtering issues by current user");
        filter.assigned_to_id = Some(me.id.to_string());
    }

    client.list_issues(&filter).await
}

async fn show(ctx: &AppContext, args: IssueShowArgs) -> AppResult<()> {
    let client = ctx.client()?;
    let issue = client.get_issue(args.id, args.comments).await?;
    ctx.output.emit(&render_issue(&issue, args.comments), &issue)
}

fn build_filter(args: &IssueListArgs) -> IssueFilter {
    IssueFilter {
        limit: Some(args.limit),
        offset: Some(args.offset),
        project_id: args.project.clone(),
        status_id: args.status.clone(),
        assigned_to_id: args.assigned_to.clone(),
        author_id: args.author.clone(),
    }
}

fn issue_row(issue: &Issue) -> Vec<String> {
    vec![
        format!("#{}", issue.id),
        truncate(&issue.status.name, STATUS_WIDTH),
        issue.priority.name.clone(),
        issue.assignee_name().to_string(),
        format_date(issue.start_date),
        format_date(issue.due_date),
        format_date(issue.updated_on.map(|at| at.date_naive())),
        truncate(&issue.subject, SUBJECT_WIDTH),
    ]
}

/// One-line summary printed after creating or editing an issue.
pub fn summary_line(issue: &Issue) -> String {
    format!(
        "#{} | {} | {} | {} | {} | {} | {}",
        issue.id,
        issue.subject,
        or_blank(issue.start_date),
        or_blank(issue.due_date),
        issue.status.name,
        issue.project.name,
        issue.assignee_name()
    )
}

pub fn render_issue(issue: &Issue, include_journals: bool) -> String {
    let rule = "=".repeat(50);
    let mut lines = vec![
        format!("Issue #{}", issue.id),
        rule.clone(),
        format!("Subject: {}", issue.subject),
        format!("Project: {}", issue.project.name),
        format!("Tracker: {}", issue.tracker.name),
        format!("Status: {}", issue.status.name),
        format!("Priority: {}", issue.priority.name),
        format!("Author: {}", issue.author.name),
        format!("Assigned to: {}", issue.assignee_name()),
    ];

    if let Some(parent) = &issue.parent {
        lines.push(format!("Parent: #{}", parent.id));
    }
    if let Some(start) = &issue.start_date {
        lines.push(format!("Start date: {start}"));
    }
    if let Some(due) = &issue.due_date {
        lines.push(format!("Due date: {due}"));
    }

    lines.push(format!("Done ratio: {}%", issue.done_ratio));
    lines.push(format!(
        "Created: {}",
        format_timestamp(issue.created_on.as_ref())
    ));
    lines.push(format!(
        "Updated: {}",
        format_timestamp(issue.updated_on.as_ref())
    ));

    if let Some(description) = issue.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.push("-".repeat(20));
        lines.push(description.to_string());
    }

    let custom = issue
        .custom_fields
        .iter()
        .filter_map(|field| {
            field
                .display_value()
                .map(|value| format!("{}: {value}", field.name))
        })
        .collect::<Vec<_>>();
    if !custom.is_empty() {
        lines.push(String::new());
        lines.push("Custom Fields:".to_string());
        lines.push("-".repeat(20));
        lines.extend(custom);
    }

    if include_journals && !issue.journals.is_empty() {
        lines.push(String::new());
        lines.push("Comments:".to_string());
        lines.push(rule);
        for journal in &issue.journals {
            lines.extend(render_journal(journal));
        }
    }

    lines.join("\n")
}

fn render_journal(journal: &Journal) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        format!(
            "[#{}] {} - {}",
            journal.id,
            journal.user.name,
            format_timestamp(journal.created_on.as_ref())
        ),
    ];

    if !journal.details.is_empty() {
        lines.push("Changes:".to_string());
        for detail in &journal.details {
            lines.push(format!(
                "  - {}: {} -> {}",
                detail.name,
                or_empty(detail.old_value.as_deref()),
                or_empty(detail.new_value.as_deref())
            ));
        }
    }

    if let Some(notes) = journal.notes.as_deref().filter(|notes| !notes.is_empty()) {
        if !journal.details.is_empty() {
            lines.push("Comment:".to_string());
        }
        lines.push(notes.to_string());
    }

    lines.push("-".repeat(30));
    lines
}

fn or_blank(date: Option<NaiveDate>) -> String {
    date.map(|date| date.to_string()).unwrap_or_default()
}

fn or_empty(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => "(empty)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_issue() -> Issue {
        serde_json::from_str(
            r#"{"id":12,"project":{"id":1,"name":"Website"},
            "tracker":{"id":1,"name":"Bug"},"status":{"id":2,"name":"In Progress"},
            "priority":{"id":4,"name":"Normal"},"author":{"id":3,"name":"Ann"},
            "assigned_to":{"id":5,"name":"Bob"},
            "subject":"Broken link","description":"Footer link 404s","done_ratio":30,
            "start_date":"2024-05-01",
            "created_on":"2024-05-01T10:00:00Z","updated_on":"2024-05-02T11:30:00Z",
            "custom_fields":[{"id":1,"name":"Env","value":"prod"},{"id":2,"name":"Blank","value":""}],
            "journals":[{"id":90,"user":{"id":3,"name":"Ann"},"notes":"Fixed in r12",
              "created_on":"2024-05-02T11:30:00Z",
              "details":[{"property":"attr","name":"status_id","old_value":"1","new_value":"2"},
                         {"property":"attr","name":"due_date","old_value":null,"new_value":"2024-06-01"}]}]}"#,
        )
        .expect("fixture should decode")
    }

    #[test]
    fn row_uses_placeholders_for_missing_dates() {
        let row = issue_row(&sample_issue());
        assert_eq!(row[0], "#12");
        assert_eq!(row[3], "Bob");
        assert_eq!(row[4], "2024-05-01");
        assert_eq!(row[5], "-");
        assert_eq!(row[6], "2024-05-02");
    }

    #[test]
    fn renders_journals_only_when_requested() {
        let issue = sample_issue();
        let plain = render_issue(&issue, false);
        assert!(plain.contains("Assigned to: Bob"));
        assert!(plain.contains("Env: prod"));
        assert!(!plain.contains("Blank"));
        assert!(!plain.contains("Comments:"));

        let full = render_issue(&issue, true);
        assert!(full.contains("[#90] Ann - 2024-05-02 11:30:00"));
        assert!(full.contains("  - status_id: 1 -> 2"));
        assert!(full.contains("  - due_date: (empty) -> 2024-06-01"));
        assert!(full.contains("Comment:\nFixed in r12"));
    }

    #[test]
    fn summary_line_lists_key_fields() {
        assert_eq!(
            summary_line(&sample_issue()),
            "#12 | Broken link | 2024-05-01 |  | In Progress | Website | Bob"
        );
    }

    #[test]
    fn filter_carries_every_flag() {
        let args = IssueListArgs {
            limit: 10,
            offset: 20,
            project: Some("web".to_string()),
            status: Some("open".to_string()),
            assigned_to: None,
            author: Some("3".to_string()),
            me: false,
        };

        let filter = build_filter(&args);
        assert_eq!(filter.limit, Some(10));
        assert_eq!(filter.offset, Some(20));
        assert_eq!(filter.project_id.as_deref(), Some("web"));
        assert_eq!(filter.status_id.as_deref(), Some("open"));
        assert_eq!(filter.author_id.as_deref(), Some("3"));
    }
}

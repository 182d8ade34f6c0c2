use tracing::info;

use crate::api::models::{IssueUpdate, Patch};
use crate::cli::IssueEditArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

use super::issues::summary_line;

pub async fn run(ctx: &AppContext, args: IssueEditArgs) -> AppResult<()> {
    let id = args.id;
    let update = build_update(args)?;

    let client = ctx.client()?;
    // Fails with the tracker's 404 before anything is written.
    client.get_issue(id, false).await?;
    client.update_issue(id, &update).await?;
    info!(issue_id = id, "issue updated");

    let issue = client.get_issue(id, false).await?;
    let text = format!("Issue updated successfully: {}", summary_line(&issue));
    ctx.output.emit(&text, &issue)
}

fn build_update(args: IssueEditArgs) -> AppResult<IssueUpdate> {
    if args
        .subject
        .as_deref()
        .is_some_and(|subject| subject.trim().is_empty())
    {
        return Err(AppError::InvalidInput(
            "--subject must not be empty".to_string(),
        ));
    }

    let assigned_to_id = if args.unassign {
        Patch::Clear
    } else {
        Patch::from_option(args.assigned_to_id)
    };

    let update = IssueUpdate {
        subject: Patch::from_option(args.subject),
        description: Patch::from_option(args.description),
        status_id: Patch::from_option(args.status_id),
        assigned_to_id,
        notes: args.notes.filter(|notes| !notes.trim().is_empty()),
    };

    if update.is_empty() {
        return Err(AppError::InvalidInput(
            "no update data provided. specify at least one option to update".to_string(),
        ));
    }

    Ok(update)
}

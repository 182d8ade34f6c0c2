use crate::api::models::{SearchQuery, SearchResult};
use crate::cli::SearchArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::output::text::{format_date, pagination_footer, truncate};

const TYPE_WIDTH: usize = 12;
const DESCRIPTION_WIDTH: usize = 100;

pub async fn run(ctx: &AppContext, args: SearchArgs) -> AppResult<()> {
    if args.limit == 0 {
        return Err(AppError::InvalidInput(
            "--limit must be greater than 0".to_string(),
        ));
    }

    let show_description = args.description;
    let query = build_query(args);
    if query.q.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "search query must not be empty".to_string(),
        ));
    }

    let client = ctx.client()?;
    let response = client.search(&query).await?;

    if ctx.output.is_json() {
        return ctx.output.emit("", &response);
    }

    if response.results.is_empty() {
        return ctx.output.note("No results found.");
    }

    ctx.output.note(&format!(
        "Search Results (Total: {}, Query: {})",
        response.total_count, query.q
    ))?;

    let mut header = vec!["Type", "ID", "Date", "Title"];
    if show_description {
        header.push("Description");
    }
    let rows = response
        .results
        .iter()
        .map(|result| result_row(result, show_description))
        .collect();
    ctx.output.emit_table(&header, rows, &response)?;

    if let Some(footer) = pagination_footer(
        response.offset,
        response.results.len(),
        response.total_count,
        "results",
    ) {
        ctx.output.note(&footer)?;
    }

    Ok(())
}

fn build_query(args: SearchArgs) -> SearchQuery {
    SearchQuery {
        q: args.query.join(" "),
        limit: Some(args.limit),
        offset: Some(args.offset),
        scope: args.scope,
        all_words: args.all_words,
        titles_only: args.titles_only,
        open_issues: args.open_issues,
        attachments: args.attachments,
        issues: args.issues,
        news: args.news,
        documents: args.documents,
        changesets: args.changesets,
        wiki_pages: args.wiki_pages,
        messages: args.messages,
        projects: args.projects,
    }
}

fn result_row(result: &SearchResult, show_description: bool) -> Vec<String> {
    let mut row = vec![
        truncate(&result.kind, TYPE_WIDTH),
        format!("#{}", result.id),
        format_date(result.datetime.map(|at| at.date_naive())),
        result.title.clone(),
    ];
    if show_description {
        row.push(compact_description(result.description.as_deref()));
    }
    row
}

/// Collapses whitespace, decodes HTML entities and truncates for a single table cell.
fn compact_description(description: Option<&str>) -> String {
    let Some(description) = description else {
        return String::new();
    };

    let decoded = html_escape::decode_html_entities(description).to_string();
    let compact = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&compact, DESCRIPTION_WIDTH)
}

use super::models::SearchQuery;

pub fn search_endpoint() -> &'static str {
    "/search.json"
}

pub fn search_query(query: &SearchQuery) -> Vec<(String, String)> {
    let mut params = vec![("q".to_string(), query.q.clone())];

    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    if let Some(offset) = query.offset {
        params.push(("offset".to_string(), offset.to_string()));
    }
    if let Some(scope) = query.scope.as_deref().filter(|scope| !scope.is_empty()) {
        params.push(("scope".to_string(), scope.to_string()));
    }

    for (key, enabled) in [
        ("all_words", query.all_words),
        ("titles_only", query.titles_only),
        ("open_issues", query.open_issues),
        ("attachments", query.attachments),
        ("issues", query.issues),
        ("news", query.news),
        ("documents", query.documents),
        ("changesets", query.changesets),
        ("wiki_pages", query.wiki_pages),
        ("messages", query.messages),
        ("projects", query.projects),
    ] {
        if enabled {
            params.push((key.to_string(), "1".to_string()));
        }
    }

    params
}

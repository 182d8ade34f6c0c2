use super::models::IssueFilter;

pub fn list_endpoint() -> &'static str {
    "/issues.json"
}

pub fn issue_endpoint(id: u32) -> String {
    format!("/issues/{id}.json")
}

pub fn get_query(include_journals: bool) -> Vec<(String, String)> {
    if include_journals {
        vec![("include".to_string(), "journals".to_string())]
    } else {
        Vec::new()
    }
}

pub fn list_query(filter: &IssueFilter) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if let Some(limit) = filter.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    if let Some(offset) = filter.offset {
        params.push(("offset".to_string(), offset.to_string()));
    }

    for (key, value) in [
        ("project_id", &filter.project_id),
        ("status_id", &filter.status_id),
        ("assigned_to_id", &filter.assigned_to_id),
        ("author_id", &filter.author_id),
    ] {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            params.push((key.to_string(), value.to_string()));
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_skips_unset_and_blank_filters() {
        let filter = IssueFilter {
            limit: Some(25),
            offset: Some(0),
            project_id: Some("website".to_string()),
            status_id: Some("  ".to_string()),
            assigned_to_id: Some("7".to_string()),
            author_id: None,
        };

        assert_eq!(
            list_query(&filter),
            vec![
                ("limit".to_string(), "25".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("project_id".to_string(), "website".to_string()),
                ("assigned_to_id".to_string(), "7".to_string()),
            ]
        );
    }

    #[test]
    fn get_query_includes_journals_on_request() {
        assert!(get_query(false).is_empty());
        assert_eq!(
            get_query(true),
            vec![("include".to_string(), "journals".to_string())]
        );
    }
}

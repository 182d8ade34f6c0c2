pub fn projects_endpoint() -> &'static str {
    "/projects.json"
}

pub fn trackers_endpoint() -> &'static str {
    "/trackers.json"
}

pub fn users_endpoint() -> &'static str {
    "/users.json"
}

pub fn current_user_endpoint() -> &'static str {
    "/users/current.json"
}

pub fn users_query() -> Vec<(String, String)> {
    vec![("limit".to_string(), "100".to_string())]
}

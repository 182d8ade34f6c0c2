use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::Profile;
use crate::error::{AppError, AppResult};

use super::issues;
use super::lookups;
use super::models::{
    Issue, IssueFilter, IssueList, IssueUpdate, NewIssue, Project, SearchQuery, SearchResults,
    Tracker, User,
};
use super::search;

const API_KEY_HEADER: &str = "X-Redmine-API-Key";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct RedmineClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RedmineClient {
    pub fn new(base_url: &str, api_key: &str) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Builds a client for `profile`, refusing profiles without a URL or API key.
    pub fn from_profile(profile: &Profile) -> AppResult<Self> {
        if profile.api_key.trim().is_empty() {
            return Err(AppError::Config(format!(
                "API key not configured for profile '{}'. run `redmine auth token add <token>` or `redmine profile add`",
                profile.name
            )));
        }

        if profile.base_url().trim().is_empty() {
            return Err(AppError::Config(format!(
                "Redmine URL not configured for profile '{}'. run `redmine config set-url <url>` or `redmine profile add`",
                profile.name
            )));
        }

        Self::new(profile.base_url(), &profile.api_key)
    }

    pub async fn list_issues(&self, filter: &IssueFilter) -> AppResult<IssueList> {
        let query = issues::list_query(filter);
        self.get_json(issues::list_endpoint(), Some(&query)).await
    }

    pub async fn get_issue(&self, id: u32, include_journals: bool) -> AppResult<Issue> {
        let endpoint = issues::issue_endpoint(id);
        let query = issues::get_query(include_journals);
        let envelope: IssueEnvelope = self.get_json(&endpoint, Some(&query)).await?;
        Ok(envelope.issue)
    }

    pub async fn create_issue(&self, issue: &NewIssue) -> AppResult<Issue> {
        let body = IssueRequest { issue };
        let envelope: IssueEnvelope = self
            .send_json(Method::POST, issues::list_endpoint(), &body)
            .await?;
        Ok(envelope.issue)
    }

    /// The tracker answers a successful update with an empty `204 No Content`.
    pub async fn update_issue(&self, id: u32, update: &IssueUpdate) -> AppResult<()> {
        let endpoint = issues::issue_endpoint(id);
        let body = IssueRequest { issue: update };
        self.send_json_no_content(Method::PUT, &endpoint, &body).await
    }

    pub async fn list_projects(&self) -> AppResult<Vec<Project>> {
        let response: ProjectListResponse =
            self.get_json(lookups::projects_endpoint(), None).await?;
        Ok(response.projects)
    }

    pub async fn list_trackers(&self) -> AppResult<Vec<Tracker>> {
        let response: TrackerListResponse =
            self.get_json(lookups::trackers_endpoint(), None).await?;
        Ok(response.trackers)
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let query = lookups::users_query();
        let response: UserListResponse = self
            .get_json(lookups::users_endpoint(), Some(&query))
            .await?;
        Ok(response.users)
    }

    pub async fn current_user(&self) -> AppResult<User> {
        let response: UserEnvelope = self
            .get_json(lookups::current_user_endpoint(), None)
            .await?;
        Ok(response.user)
    }

    pub async fn search(&self, query: &SearchQuery) -> AppResult<SearchResults> {
        let params = search::search_query(query);
        self.get_json(search::search_endpoint(), Some(&params)).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<&[(String, String)]>,
    ) -> AppResult<T> {
        let mut request = self.request(Method::GET, endpoint)?;
        if let Some(query) = query.filter(|query| !query.is_empty()) {
            request = request.query(query);
        }

        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> AppResult<T> {
        let request = self.request(method, endpoint)?.json(body);
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json_no_content<B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> AppResult<()> {
        let request = self.request(method, endpoint)?.json(body);
        self.execute(request).await?;
        Ok(())
    }

    fn request(&self, method: Method, endpoint: &str) -> AppResult<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        debug!(%method, %url, "redmine request");
        Ok(self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key))
    }

    fn endpoint_url(&self, endpoint: &str) -> AppResult<Url> {
        let endpoint = endpoint.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{endpoint}", self.base_url))?)
    }

    async fn execute(&self, request: RequestBuilder) -> AppResult<String> {
        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "redmine response");

        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }

        Err(map_api_error(status, &body))
    }
}

#[derive(Debug, Serialize)]
struct IssueRequest<'a, T: Serialize> {
    issue: &'a T,
}

#[derive(Debug, Deserialize)]
struct IssueEnvelope {
    issue: Issue,
}

#[derive(Debug, Deserialize)]
struct ProjectListResponse {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct TrackerListResponse {
    #[serde(default)]
    trackers: Vec<Tracker>,
}

#[derive(Debug, Deserialize)]
struct UserListResponse {
    #[serde(default)]
    users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

fn map_api_error(status: StatusCode, body: &str) -> AppError {
    AppError::Api {
        status: status.as_u16(),
        body: body.trim().to_string(),
    }
}

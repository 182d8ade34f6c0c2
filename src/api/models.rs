use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// `{id, name}` pair the tracker uses for projects, trackers, statuses and priorities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: u32,
    #[serde(default)]
    pub name: String,
}

pub type Project = NamedRef;
pub type Tracker = NamedRef;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default, rename = "mail")]
    pub email: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub status: Option<u8>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login_on: Option<DateTime<Utc>>,
}

impl User {
    /// `/users.json` returns first and last names while issue payloads return `name`.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }

        [self.firstname.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn status_name(&self) -> &'static str {
        match self.status {
            Some(1) => "Active",
            Some(2) => "Registered",
            Some(3) => "Locked",
            _ => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: u32,
    #[serde(default)]
    pub project: NamedRef,
    #[serde(default)]
    pub tracker: NamedRef,
    #[serde(default)]
    pub status: NamedRef,
    #[serde(default)]
    pub priority: NamedRef,
    #[serde(default)]
    pub author: NamedRef,
    #[serde(default)]
    pub assigned_to: Option<NamedRef>,
    #[serde(default)]
    pub parent: Option<IssueRef>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub done_ratio: u8,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub spent_hours: Option<f64>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub journals: Vec<Journal>,
}

impl Issue {
    pub fn assignee_name(&self) -> &str {
        self.assigned_to
            .as_ref()
            .map(|user| user.name.as_str())
            .unwrap_or("Not assigned")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRef {
    pub id: u32,
}

/// Custom field values are a string, a list of strings, or null depending on the field format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomField {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

impl CustomField {
    pub fn display_value(&self) -> Option<String> {
        let text = match &self.value {
            serde_json::Value::Null => return None,
            serde_json::Value::String(value) => value.clone(),
            serde_json::Value::Array(values) => values
                .iter()
                .filter_map(|value| match value {
                    serde_json::Value::String(value) => Some(value.clone()),
                    serde_json::Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        };

        Some(text).filter(|value| !value.is_empty())
    }
}

/// One change-history entry of an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub id: u32,
    #[serde(default)]
    pub user: NamedRef,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub details: Vec<JournalDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalDetail {
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub old_value: Option<String>,
    #[serde(default)]
    pub new_value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueList {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub project_id: Option<String>,
    pub status_id: Option<String>,
    pub assigned_to_id: Option<String>,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewIssue {
    pub project_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_id: Option<u32>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_issue_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// Per-field edit: leave the field alone, clear it, or set a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Set(value),
            None => Patch::Keep,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            // The tracker clears a field when it receives an empty string.
            Patch::Clear | Patch::Keep => serializer.serialize_str(""),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub subject: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub status_id: Patch<u32>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub assigned_to_id: Patch<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl IssueUpdate {
    pub fn is_empty(&self) -> bool {
        self.subject.is_keep()
            && self.description.is_keep()
            && self.status_id.is_keep()
            && self.assigned_to_id.is_keep()
            && self.notes.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub q: String,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub scope: Option<String>,
    pub all_words: bool,
    pub titles_only: bool,
    pub open_issues: bool,
    pub attachments: bool,
    pub issues: bool,
    pub news: bool,
    pub documents: bool,
    pub changesets: bool,
    pub wiki_pages: bool,
    pub messages: bool,
    pub projects: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_omits_kept_fields() {
        let update = IssueUpdate {
            notes: Some("looks good".to_string()),
            status_id: Patch::Set(3),
            ..IssueUpdate::default()
        };

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"status_id": 3, "notes": "looks good"}));
    }

    #[test]
    fn update_sends_empty_string_for_cleared_fields() {
        let update = IssueUpdate {
            assigned_to_id: Patch::Clear,
            ..IssueUpdate::default()
        };

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"assigned_to_id": ""}));
        assert!(!update.is_empty());
        assert!(IssueUpdate::default().is_empty());
    }

    #[test]
    fn new_issue_skips_unset_optionals() {
        let issue = NewIssue {
            project_id: 1,
            tracker_id: Some(2),
            subject: "Crash on save".to_string(),
            ..NewIssue::default()
        };

        let body = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"project_id": 1, "tracker_id": 2, "subject": "Crash on save"})
        );
    }

    #[test]
    fn issue_dates_decode_and_serialize_as_iso() {
        let issue: Issue = serde_json::from_str(
            r#"{"id":1,"start_date":"2024-05-01","due_date":null,
                "created_on":"2024-05-01T10:00:00Z","updated_on":"2024-05-02T11:30:00+02:00"}"#,
        )
        .unwrap();

        assert_eq!(issue.start_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(issue.due_date, None);
        assert_eq!(
            issue.updated_on.map(|at| at.to_rfc3339()),
            Some("2024-05-02T09:30:00+00:00".to_string())
        );

        let body = serde_json::to_value(NewIssue {
            project_id: 1,
            subject: "Dated".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            ..NewIssue::default()
        })
        .unwrap();
        assert_eq!(body["due_date"], "2024-06-01");
    }

    #[test]
    fn user_display_name_falls_back_to_first_and_last() {
        let user: User = serde_json::from_str(
            r#"{"id":5,"login":"jdoe","firstname":"Jane","lastname":"Doe","mail":"jane@example.test","status":1}"#,
        )
        .unwrap();

        assert_eq!(user.display_name(), "Jane Doe");
        assert_eq!(user.email.as_deref(), Some("jane@example.test"));
        assert_eq!(user.status_name(), "Active");
    }

    #[test]
    fn custom_field_values_render_lists_and_skip_blanks() {
        let fields: Vec<CustomField> = serde_json::from_str(
            r#"[{"id":1,"name":"Env","value":"prod"},
                {"id":2,"name":"Tags","multiple":true,"value":["a","b"]},
                {"id":3,"name":"Empty","value":""},
                {"id":4,"name":"Null","value":null}]"#,
        )
        .unwrap();

        let values = fields
            .iter()
            .map(CustomField::display_value)
            .collect::<Vec<_>>();
        assert_eq!(
            values,
            vec![Some("prod".to_string()), Some("a, b".to_string()), None, None]
        );
    }
}

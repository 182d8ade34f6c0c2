use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "redmine",
    version,
    about = "Redmine command line interface",
    long_about = "A command-line interface for managing Redmine issues and projects"
)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        global = true,
        env = "REDMINE_PROFILE",
        help = "Profile to use for this command"
    )]
    pub profile: Option<String>,
    #[arg(
        long,
        global = true,
        env = "REDMINE_CLI_CONFIG",
        help = "Path to the config file (default: ~/.redminecli/config)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage Redmine server profiles
    Profile(ProfileArgs),
    /// Manage API tokens
    Auth(AuthArgs),
    /// Legacy single-profile configuration commands
    Config(ConfigArgs),
    /// List, view, create and edit issues
    Issues(IssuesArgs),
    /// List users
    Users(UsersArgs),
    /// Search issues, wiki pages, documents and other content
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Add a profile (replaces an existing one with the same name)
    Add(ProfileAddArgs),
    /// List all configured profiles
    List,
    /// Set the default profile
    Use(ProfileNameArgs),
    /// Remove a profile
    Remove(ProfileNameArgs),
    /// Show details of a profile (default profile when no name is given)
    Show(ProfileShowArgs),
}

#[derive(Debug, Args)]
pub struct ProfileAddArgs {
    #[arg(help = "Profile name")]
    pub name: String,
    #[arg(help = "Redmine server URL")]
    pub url: String,
    #[arg(help = "Redmine API key")]
    pub api_key: String,
}

#[derive(Debug, Args)]
pub struct ProfileNameArgs {
    #[arg(help = "Profile name")]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct ProfileShowArgs {
    #[arg(help = "Profile name")]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// API token management
    Token(TokenArgs),
}

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommand,
}

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Store an API token on the selected profile
    Add(TokenAddArgs),
}

#[derive(Debug, Args)]
pub struct TokenAddArgs {
    #[arg(help = "API token (prompted when omitted)")]
    pub token: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Set the Redmine URL of the selected profile
    SetUrl(SetUrlArgs),
    /// Show the selected profile
    Show,
}

#[derive(Debug, Args)]
pub struct SetUrlArgs {
    #[arg(help = "Redmine server URL")]
    pub url: String,
}

#[derive(Debug, Args)]
pub struct IssuesArgs {
    #[command(subcommand)]
    pub command: IssuesCommand,
}

#[derive(Debug, Subcommand)]
pub enum IssuesCommand {
    /// List issues
    List(IssueListArgs),
    /// Show issue details
    Show(IssueShowArgs),
    /// Create a new issue
    Add(IssueAddArgs),
    /// Edit an existing issue
    Edit(IssueEditArgs),
    /// Print the web URL of an issue
    Url(IssueIdArgs),
}

#[derive(Debug, Args)]
pub struct IssueListArgs {
    #[arg(long, default_value_t = 25, help = "Number of issues to retrieve")]
    pub limit: u32,
    #[arg(long, default_value_t = 0, help = "Offset for pagination")]
    pub offset: u32,
    #[arg(long, help = "Project id or identifier to filter by")]
    pub project: Option<String>,
    #[arg(long, help = "Status id to filter by (or open, closed, *)")]
    pub status: Option<String>,
    #[arg(long, conflicts_with = "me", help = "Assignee id to filter by")]
    pub assigned_to: Option<String>,
    #[arg(long, help = "Author id to filter by")]
    pub author: Option<String>,
    #[arg(long, help = "Only issues assigned to the current user")]
    pub me: bool,
}

#[derive(Debug, Args)]
pub struct IssueShowArgs {
    #[arg(help = "Issue id")]
    pub id: u32,
    #[arg(short = 'c', long, help = "Include comments (journals) in the output")]
    pub comments: bool,
}

#[derive(Debug, Args)]
pub struct IssueAddArgs {
    #[arg(long, help = "Project number from the project list")]
    pub project: Option<usize>,
    #[arg(long, help = "Tracker number from the tracker list")]
    pub tracker: Option<usize>,
    #[arg(long, help = "Issue title")]
    pub title: Option<String>,
    #[arg(long, help = "Issue description")]
    pub description: Option<String>,
    #[arg(long, help = "Parent issue id")]
    pub parent: Option<u32>,
    #[arg(long, help = "Assignee email")]
    pub assignee: Option<String>,
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    pub start_date: Option<String>,
    #[arg(long, help = "Due date (YYYY-MM-DD)")]
    pub due_date: Option<String>,
}

#[derive(Debug, Args)]
pub struct IssueEditArgs {
    #[arg(help = "Issue id")]
    pub id: u32,
    #[arg(long, help = "New subject")]
    pub subject: Option<String>,
    #[arg(long, help = "New description")]
    pub description: Option<String>,
    #[arg(long, help = "Comment to add")]
    pub notes: Option<String>,
    #[arg(long, visible_alias = "status_id", help = "New status id")]
    pub status_id: Option<u32>,
    #[arg(long, visible_alias = "assigned_to_id", help = "New assignee id")]
    pub assigned_to_id: Option<u32>,
    #[arg(long, conflicts_with = "assigned_to_id", help = "Remove the assignee")]
    pub unassign: bool,
}

#[derive(Debug, Args)]
pub struct IssueIdArgs {
    #[arg(help = "Issue id")]
    pub id: u32,
}

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List users
    List,
    /// Show the user owning the API key
    Me,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(required = true, num_args = 1.., help = "Search terms")]
    pub query: Vec<String>,
    #[arg(long, default_value_t = 25, help = "Number of results to retrieve")]
    pub limit: u32,
    #[arg(long, default_value_t = 0, help = "Offset for pagination")]
    pub offset: u32,
    #[arg(long, help = "Search scope (all, my_project, subprojects)")]
    pub scope: Option<String>,
    #[arg(long, help = "Match all query words")]
    pub all_words: bool,
    #[arg(long, help = "Search only in titles")]
    pub titles_only: bool,
    #[arg(long, help = "Filter for open issues only")]
    pub open_issues: bool,
    #[arg(long, help = "Search in attachments")]
    pub attachments: bool,
    #[arg(short = 'd', long, help = "Show description/body content in results")]
    pub description: bool,
    #[arg(long, help = "Search in issues")]
    pub issues: bool,
    #[arg(long, help = "Search in news")]
    pub news: bool,
    #[arg(long, help = "Search in documents")]
    pub documents: bool,
    #[arg(long, help = "Search in changesets")]
    pub changesets: bool,
    #[arg(long, help = "Search in wiki pages")]
    pub wiki_pages: bool,
    #[arg(long, help = "Search in messages")]
    pub messages: bool,
    #[arg(long, help = "Search in projects")]
    pub projects: bool,
}

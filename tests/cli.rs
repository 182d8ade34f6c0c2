use clap::Parser;
use redmine::cli::{
    AuthCommand, Cli, Command, ConfigCommand, IssuesCommand, ProfileCommand, TokenCommand,
    UsersCommand,
};

#[test]
fn parses_profile_add() {
    let cli = Cli::try_parse_from([
        "redmine",
        "profile",
        "add",
        "work",
        "https://redmine.example.test",
        "abc123",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Profile(profile) => match profile.command {
            ProfileCommand::Add(add) => {
                assert_eq!(add.name, "work");
                assert_eq!(add.url, "https://redmine.example.test");
                assert_eq!(add.api_key, "abc123");
            }
            other => panic!("expected profile add, got {other:?}"),
        },
        _ => panic!("expected profile command"),
    }
}

#[test]
fn profile_add_requires_all_three_values() {
    let result = Cli::try_parse_from(["redmine", "profile", "add", "work", "https://x.test"]);
    assert!(result.is_err());
}

#[test]
fn parses_profile_show_without_name() {
    let cli = Cli::try_parse_from(["redmine", "profile", "show"]).expect("cli parse should work");
    match cli.command {
        Command::Profile(profile) => match profile.command {
            ProfileCommand::Show(show) => assert!(show.name.is_none()),
            other => panic!("expected profile show, got {other:?}"),
        },
        _ => panic!("expected profile command"),
    }
}

#[test]
fn parses_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "redmine", "issues", "list", "-p", "home", "--json", "-vv",
    ])
    .expect("cli parse should work");
    assert_eq!(cli.profile.as_deref(), Some("home"));
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn parses_issue_list_filters() {
    let cli = Cli::try_parse_from([
        "redmine",
        "issues",
        "list",
        "--limit",
        "5",
        "--project",
        "website",
        "--status",
        "open",
        "--author",
        "3",
        "--me",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Issues(issues) => match issues.command {
            IssuesCommand::List(list) => {
                assert_eq!(list.limit, 5);
                assert_eq!(list.offset, 0);
                assert_eq!(list.project.as_deref(), Some("website"));
                assert_eq!(list.status.as_deref(), Some("open"));
                assert_eq!(list.author.as_deref(), Some("3"));
                assert!(list.me);
            }
            other => panic!("expected issues list, got {other:?}"),
        },
        _ => panic!("expected issues command"),
    }
}

#[test]
fn me_conflicts_with_explicit_assignee() {
    let result = Cli::try_parse_from([
        "redmine",
        "issues",
        "list",
        "--me",
        "--assigned-to",
        "4",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_issue_show_with_comments() {
    let cli = Cli::try_parse_from(["redmine", "issues", "show", "42", "-c"])
        .expect("cli parse should work");
    match cli.command {
        Command::Issues(issues) => match issues.command {
            IssuesCommand::Show(show) => {
                assert_eq!(show.id, 42);
                assert!(show.comments);
            }
            other => panic!("expected issues show, got {other:?}"),
        },
        _ => panic!("expected issues command"),
    }
}

#[test]
fn rejects_non_numeric_issue_id() {
    assert!(Cli::try_parse_from(["redmine", "issues", "show", "abc"]).is_err());
}

#[test]
fn parses_issue_edit_with_legacy_flag_names() {
    let cli = Cli::try_parse_from([
        "redmine",
        "issues",
        "edit",
        "7",
        "--status_id",
        "3",
        "--notes",
        "done",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Issues(issues) => match issues.command {
            IssuesCommand::Edit(edit) => {
                assert_eq!(edit.id, 7);
                assert_eq!(edit.status_id, Some(3));
                assert_eq!(edit.notes.as_deref(), Some("done"));
                assert!(!edit.unassign);
            }
            other => panic!("expected issues edit, got {other:?}"),
        },
        _ => panic!("expected issues command"),
    }
}

#[test]
fn unassign_conflicts_with_assignee() {
    let result = Cli::try_parse_from([
        "redmine",
        "issues",
        "edit",
        "7",
        "--unassign",
        "--assigned-to-id",
        "2",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_issue_add() {
    let cli = Cli::try_parse_from([
        "redmine",
        "issues",
        "add",
        "--project",
        "1",
        "--tracker",
        "2",
        "--title",
        "Crash on save",
        "--assignee",
        "dev@example.test",
        "--due-date",
        "2024-06-01",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Issues(issues) => match issues.command {
            IssuesCommand::Add(add) => {
                assert_eq!(add.project, Some(1));
                assert_eq!(add.tracker, Some(2));
                assert_eq!(add.title.as_deref(), Some("Crash on save"));
                assert_eq!(add.assignee.as_deref(), Some("dev@example.test"));
                assert_eq!(add.due_date.as_deref(), Some("2024-06-01"));
                assert!(add.parent.is_none());
            }
            other => panic!("expected issues add, got {other:?}"),
        },
        _ => panic!("expected issues command"),
    }
}

#[test]
fn parses_search_terms_and_flags() {
    let cli = Cli::try_parse_from([
        "redmine",
        "search",
        "login",
        "timeout",
        "--titles-only",
        "--wiki-pages",
        "-d",
    ])
    .expect("cli parse should work");
    match cli.command {
        Command::Search(search) => {
            assert_eq!(search.query, ["login", "timeout"]);
            assert!(search.titles_only);
            assert!(search.wiki_pages);
            assert!(search.description);
            assert_eq!(search.limit, 25);
        }
        _ => panic!("expected search command"),
    }
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["redmine", "search"]).is_err());
}

#[test]
fn parses_auth_token_add_without_token() {
    let cli = Cli::try_parse_from(["redmine", "auth", "token", "add"])
        .expect("cli parse should work");
    match cli.command {
        Command::Auth(auth) => match auth.command {
            AuthCommand::Token(token) => match token.command {
                TokenCommand::Add(add) => assert!(add.token.is_none()),
            },
        },
        _ => panic!("expected auth command"),
    }
}

#[test]
fn parses_legacy_config_commands() {
    let cli = Cli::try_parse_from(["redmine", "config", "set-url", "https://x.test"])
        .expect("cli parse should work");
    match cli.command {
        Command::Config(config) => match config.command {
            ConfigCommand::SetUrl(set) => assert_eq!(set.url, "https://x.test"),
            other => panic!("expected set-url, got {other:?}"),
        },
        _ => panic!("expected config command"),
    }
}

#[test]
fn parses_users_me() {
    let cli = Cli::try_parse_from(["redmine", "users", "me"]).expect("cli parse should work");
    match cli.command {
        Command::Users(users) => assert!(matches!(users.command, UsersCommand::Me)),
        _ => panic!("expected users command"),
    }
}

#[test]
fn command_tree_is_consistent() {
    use clap::CommandFactory;

    Cli::command().debug_assert();
}

use serde::Serialize;

use crate::cli::{ProfileAddArgs, ProfileCommand};
use crate::config::{Config, Profile};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

/// A profile as shown to the user: API key masked, default flag attached.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileView {
    pub name: String,
    pub redmine_url: String,
    pub api_key: String,
    pub default: bool,
}

impl ProfileView {
    pub fn new(config: &Config, profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            redmine_url: profile.redmine_url.clone(),
            api_key: profile.masked_api_key(),
            default: config.is_default(&profile.name),
        }
    }
}

#[derive(Debug, Serialize)]
struct ProfileChange {
    profile: String,
    default_profile: String,
    note: String,
}

pub fn run(ctx: &mut AppContext, command: ProfileCommand) -> AppResult<()> {
    match command {
        ProfileCommand::Add(args) => add(ctx, args),
        ProfileCommand::List => list(ctx),
        ProfileCommand::Use(args) => {
            let name = args.name.trim();
            ctx.config.set_default_profile(name)?;
            ctx.save()?;
            emit_change(ctx, name, format!("Default profile set to '{name}'"))
        }
        ProfileCommand::Remove(args) => {
            let name = args.name.trim();
            let was_default = ctx.config.is_default(name);
            ctx.config.remove_profile(name)?;
            ctx.save()?;

            let mut text = format!("Profile '{name}' has been removed");
            if was_default {
                if ctx.config.default_profile.is_empty() {
                    text.push_str("\nNo profiles remain; add one with `redmine profile add`");
                } else {
                    text.push_str(&format!(
                        "\nDefault profile is now '{}'",
                        ctx.config.default_profile
                    ));
                }
            }
            emit_change(ctx, name, text)
        }
        ProfileCommand::Show(args) => show(ctx, args.name.as_deref()),
    }
}

fn add(ctx: &mut AppContext, args: ProfileAddArgs) -> AppResult<()> {
    ctx.config.add_profile(&args.name, &args.url, &args.api_key)?;
    ctx.save()?;

    let name = args.name.trim();
    let mut text = format!("Profile '{name}' has been added successfully");
    if ctx.config.is_default(name) {
        text.push_str("\nSet as default profile");
    }
    emit_change(ctx, name, text)
}

fn list(ctx: &AppContext) -> AppResult<()> {
    let views = ctx
        .config
        .profiles
        .values()
        .map(|profile| ProfileView::new(&ctx.config, profile))
        .collect::<Vec<_>>();

    if ctx.output.is_json() {
        return ctx.output.emit("", &views);
    }

    if views.is_empty() {
        return ctx.output.note("No profiles configured.");
    }

    let rows = views
        .iter()
        .map(|view| {
            vec![
                if view.default { "*" } else { "" }.to_string(),
                view.name.clone(),
                view.redmine_url.clone(),
                view.api_key.clone(),
            ]
        })
        .collect();
    ctx.output
        .emit_table(&["", "Name", "URL", "API Key"], rows, &views)?;
    ctx.output.note("* Default profile")
}

fn show(ctx: &AppContext, name: Option<&str>) -> AppResult<()> {
    let name = match name {
        Some(name) => name.trim().to_string(),
        None if !ctx.config.default_profile.is_empty() => ctx.config.default_profile.clone(),
        None => {
            return Err(AppError::InvalidInput(
                "no default profile set and no profile specified".to_string(),
            ));
        }
    };

    let profile = ctx.config.profile(&name)?;
    let view = ProfileView::new(&ctx.config, &profile);
    ctx.output.emit(&describe(&view), &view)
}

pub fn describe(view: &ProfileView) -> String {
    let mut lines = vec![format!("Profile: {}", view.name)];
    if view.default {
        lines.push("Status: Default profile".to_string());
    }
    lines.push(format!("Redmine URL: {}", view.redmine_url));
    if view.api_key.is_empty() {
        lines.push("API Key: Not configured".to_string());
    } else {
        lines.push(format!("API Key: {}", view.api_key));
    }
    lines.join("\n")
}

fn emit_change(ctx: &AppContext, profile: &str, text: String) -> AppResult<()> {
    let change = ProfileChange {
        profile: profile.to_string(),
        default_profile: ctx.config.default_profile.clone(),
        note: text.replace('\n', "; "),
    };
    ctx.output.emit(&text, &change)
}

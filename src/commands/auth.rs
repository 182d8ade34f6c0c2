use serde::Serialize;

use crate::cli::{AuthCommand, TokenCommand};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

use super::prompt;

#[derive(Debug, Serialize)]
struct TokenSaved {
    profile: String,
    api_key: String,
    note: String,
}

pub fn run(ctx: &mut AppContext, command: AuthCommand) -> AppResult<()> {
    match command {
        AuthCommand::Token(args) => match args.command {
            TokenCommand::Add(args) => add_token(ctx, args.token),
        },
    }
}

fn add_token(ctx: &mut AppContext, token: Option<String>) -> AppResult<()> {
    let profile = ctx.profile()?;

    let token = match token.map(|token| token.trim().to_string()) {
        Some(token) if !token.is_empty() => token,
        Some(_) => {
            return Err(AppError::InvalidInput(
                "API token must not be empty".to_string(),
            ));
        }
        None => prompt::prompt_required("API token: ", "<token>")?,
    };

    ctx.config.set_api_key(&profile.name, &token)?;
    ctx.save()?;

    let saved = ctx.config.profile(&profile.name)?;
    let text = format!(
        "API token has been saved to profile '{}' successfully",
        saved.name
    );
    let result = TokenSaved {
        profile: saved.name.clone(),
        api_key: saved.masked_api_key(),
        note: text.clone(),
    };
    ctx.output.emit(&text, &result)
}

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        profile,
        config,
        json,
        verbose: _,
        command,
    } = cli;

    let mut ctx = AppContext::bootstrap(profile, config, json)?;

    match command {
        Command::Profile(args) => commands::profile::run(&mut ctx, args.command),
        Command::Auth(args) => commands::auth::run(&mut ctx, args.command),
        Command::Config(args) => commands::config::run(&mut ctx, args.command),
        Command::Issues(args) => commands::issues::run(&ctx, args.command).await,
        Command::Users(args) => commands::users::run(&ctx, args.command).await,
        Command::Search(args) => commands::search::run(&ctx, args).await,
    }
}

use crate::cli::ConfigCommand;
use crate::context::AppContext;
use crate::error::AppResult;

use super::profile::{ProfileView, describe};

pub fn run(ctx: &mut AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::SetUrl(args) => {
            let profile = ctx.profile()?;
            ctx.config.set_url(&profile.name, &args.url)?;
            ctx.save()?;

            let updated = ctx.config.profile(&profile.name)?;
            let view = ProfileView::new(&ctx.config, &updated);
            let text = format!(
                "Redmine URL has been saved to profile '{}' successfully",
                view.name
            );
            ctx.output.emit(&text, &view)
        }
        ConfigCommand::Show => {
            let profile = ctx.profile()?;
            let view = ProfileView::new(&ctx.config, &profile);
            let text = format!(
                "Config file: {}\n{}",
                ctx.paths.config_file().display(),
                describe(&view)
            );
            ctx.output.emit(&text, &view)
        }
    }
}

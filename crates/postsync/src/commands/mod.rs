//! Command dispatch: bridges CLI args -> service operations -> output formatting.

pub mod config_cmd;
pub mod posts;
pub mod util;

use postsync_core::PostsService;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    service: &PostsService,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(&global.color_mode());
    match cmd {
        Command::List(args) => posts::list(service, args, global).await,
        Command::Show { id } => posts::show(service, &id, global).await,
        Command::Create(args) => posts::create(service, args, global, color).await,
        Command::Update(args) => posts::update(service, args, global, color).await,
        Command::Delete { id } => posts::delete(service, &id, global, color).await,
        Command::React(args) => posts::react(service, args, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "config and completions are handled before connecting".into(),
        )),
    }
}

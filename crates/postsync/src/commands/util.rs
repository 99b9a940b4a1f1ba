//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::sync::Arc;

use postsync_core::{FetchStatus, Post, PostId, PostsService};

use crate::error::CliError;

/// Load the collection into the cache, surfacing a failed fetch.
pub async fn load(service: &PostsService) -> Result<(), CliError> {
    service.fetch_all().await;
    let state = service.state();
    match state.status() {
        FetchStatus::Succeeded => Ok(()),
        _ => Err(CliError::FetchFailed {
            message: state.error().unwrap_or("unknown error").to_owned(),
        }),
    }
}

pub fn parse_post_id(raw: &str) -> Result<PostId, CliError> {
    raw.parse().map_err(|e: postsync_core::InvalidPostId| CliError::Validation {
        field: "id".into(),
        reason: e.to_string(),
    })
}

/// Look up a cached post by its textual id.
pub fn resolve_post(service: &PostsService, raw: &str) -> Result<Arc<Post>, CliError> {
    let id = parse_post_id(raw)?;
    service
        .state()
        .posts()
        .get(&id)
        .cloned()
        .ok_or_else(|| CliError::NotFound {
            identifier: raw.into(),
        })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_uuid_ids_parse() {
        assert_eq!(parse_post_id("17").ok(), Some(PostId::Remote(17)));
        assert!(parse_post_id("9a0c6c1e-8f0b-4a8e-9a4f-1f2b3c4d5e6f").is_ok_and(|id| id.is_local()));
        assert!(matches!(
            parse_post_id("seventeen"),
            Err(CliError::Validation { .. })
        ));
    }
}

//! Post command handlers.

use std::fmt::Write as _;
use std::sync::Arc;

use tabled::Tabled;

use postsync_core::{AuthorId, Post, PostDraft, PostId, PostsService, ReactionKind, select_all};

use crate::cli::{CreateArgs, GlobalOpts, ListArgs, ReactArgs, UpdateArgs};
use crate::error::CliError;
use crate::output;

use super::util;

const TITLE_WIDTH: usize = 48;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Reactions")]
    reactions: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Arc<Post>> for PostRow {
    fn from(p: &Arc<Post>) -> Self {
        Self {
            id: p.id.to_string(),
            author: author_label(p),
            title: truncate(&p.title, TITLE_WIDTH),
            reactions: reaction_summary(p),
            created: p.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

fn author_label(post: &Post) -> String {
    post.author_id.map_or_else(|| "-".into(), |a| a.to_string())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Non-zero reactions as `emoji count` pairs.
fn reaction_summary(post: &Post) -> String {
    post.reactions
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(kind, n)| format!("{} {n}", kind.emoji()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn detail(post: &Arc<Post>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:       {}", post.id);
    let _ = writeln!(out, "Author:   {}", author_label(post));
    let _ = writeln!(out, "Created:  {}", post.created_at.to_rfc3339());
    let _ = writeln!(out, "Title:    {}", post.title);
    let _ = writeln!(out, "\n{}\n", post.body);
    let reactions = post
        .reactions
        .iter()
        .map(|(kind, n)| format!("{} {n}", kind.emoji()))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = write!(out, "{reactions}");
    out
}

fn print_post(post: &Arc<Post>, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.output_format(), post, detail, |p| p.id.to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_cached(service: &PostsService, id: &PostId, global: &GlobalOpts) -> Result<(), CliError> {
    let post = util::resolve_post(service, &id.to_string())?;
    print_post(&post, global)
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(service: &PostsService, args: ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    util::load(service).await?;

    let mut posts: Vec<Arc<Post>> = match args.author {
        Some(author) => service.posts_by_author(AuthorId(author)).to_vec(),
        None => select_all(&service.state()),
    };
    if let Some(limit) = args.limit {
        posts.truncate(limit);
    }

    let out = output::render_list(
        &global.output_format(),
        &posts,
        |p| PostRow::from(p),
        |p| p.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn show(service: &PostsService, id: &str, global: &GlobalOpts) -> Result<(), CliError> {
    util::load(service).await?;
    let post = util::resolve_post(service, id)?;
    print_post(&post, global)
}

pub async fn create(
    service: &PostsService,
    args: CreateArgs,
    global: &GlobalOpts,
    color: bool,
) -> Result<(), CliError> {
    let draft = PostDraft::new(args.title, args.body, args.author);

    if args.local {
        let id = service.add_local(draft);
        output::notice(&format!("Added local post {id}"), true, color, global.quiet);
        return print_cached(service, &id, global);
    }

    util::load(service).await?;
    match service.create(&draft).await? {
        Some(id) => {
            output::notice(&format!("Created post {id}"), true, color, global.quiet);
            print_cached(service, &id, global)
        }
        None => {
            output::notice(
                "Server accepted the post but returned no id; nothing was cached",
                false,
                color,
                global.quiet,
            );
            Ok(())
        }
    }
}

pub async fn update(
    service: &PostsService,
    args: UpdateArgs,
    global: &GlobalOpts,
    color: bool,
) -> Result<(), CliError> {
    if args.title.is_none() && args.body.is_none() && args.author.is_none() {
        return Err(CliError::Validation {
            field: "update".into(),
            reason: "pass at least one of --title, --body, --author".into(),
        });
    }

    util::load(service).await?;
    let current = util::resolve_post(service, &args.id)?;

    let mut edited = Post::clone(&current);
    if let Some(title) = args.title {
        edited.title = title;
    }
    if let Some(body) = args.body {
        edited.body = body;
    }
    if let Some(author) = args.author {
        edited.author_id = Some(AuthorId(author));
    }

    if service.update(&edited).await {
        output::notice(&format!("Updated post {}", edited.id), true, color, global.quiet);
        print_cached(service, &edited.id, global)
    } else {
        output::notice(
            "Server response could not be used; cached post unchanged",
            false,
            color,
            global.quiet,
        );
        Ok(())
    }
}

pub async fn delete(
    service: &PostsService,
    id: &str,
    global: &GlobalOpts,
    color: bool,
) -> Result<(), CliError> {
    util::load(service).await?;
    let post = util::resolve_post(service, id)?;

    if !util::confirm(
        &format!("Delete post {} \"{}\"?", post.id, truncate(&post.title, TITLE_WIDTH)),
        "delete",
        global.yes,
    )? {
        return Ok(());
    }

    if service.remove(&post.id).await {
        let remaining = service.state().posts().len();
        output::notice(
            &format!("Deleted post {} ({remaining} remaining)", post.id),
            true,
            color,
            global.quiet,
        );
    } else {
        output::notice(
            &format!("Server did not confirm deletion of post {}", post.id),
            false,
            color,
            global.quiet,
        );
    }
    Ok(())
}

pub async fn react(service: &PostsService, args: ReactArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let kind = ReactionKind::lookup(&args.kind).ok_or_else(|| CliError::Validation {
        field: "kind".into(),
        reason: format!("unknown reaction '{}', expected one of: thumbsUp, wow, heart, rocket, coffee", args.kind),
    })?;

    util::load(service).await?;
    let post = util::resolve_post(service, &args.id)?;
    for _ in 0..args.times {
        service.react(post.id.clone(), kind);
    }
    print_cached(service, &post.id, global)
}

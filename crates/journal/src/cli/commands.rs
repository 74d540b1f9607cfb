//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Context Setup**: logging, configuration, document choice, API
//! 3. **API Dispatch**: call the matching `JournalApi` method
//! 4. **Output Formatting**: `CmdResult` into cards, tables or JSON
//!
//! Errors bubble up as `anyhow::Error`; `main` prints them and exits non-zero.

use super::logging;
use super::render::{
    render_entries, render_json, render_messages, render_status, render_tags, ListContext,
    Renderer,
};
use super::setup::{Cli, Commands, EditFields, EntryFields, ListArgs, OutputMode};
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use clap::Parser;
use journalapp::api::JournalApi;
use journalapp::commands::{CmdResult, DEMO_WARNING};
use journalapp::config::JournalConfig;
use journalapp::filter::FilterCriteria;
use journalapp::init::{initialize, DocumentSource};
use journalapp::model::EntryDraft;
use journalapp::store::fs::FileStore;
use tracing::debug;

struct AppContext {
    api: JournalApi<FileStore>,
    config: JournalConfig,
    source: DocumentSource,
    output: OutputMode,
    renderer: Renderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None => handle_list(&ctx, ListArgs::default()),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::Add(fields)) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, &id, fields),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Status) => handle_status(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let journal = initialize(&cwd, cli.file.clone())?;
    debug!(path = %journal.source.path.display(), "journal opened");

    Ok(AppContext {
        api: journal.api,
        config: journal.config,
        source: journal.source,
        output: cli.output,
        renderer: Renderer::for_mode(cli.output)?,
    })
}

fn handle_list(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let criteria = FilterCriteria {
        entry_type: args.entry_type.unwrap_or_default(),
        year: args.year,
        tags: args.tags,
    };
    let result = ctx.api.list_entries(&criteria)?;
    print_entries(ctx, &result, "No entries found.")
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view_entry(id)?;
    print_entries(ctx, &result, "No entry.")
}

fn handle_add(ctx: &mut AppContext, fields: EntryFields) -> Result<()> {
    let mut draft = EntryDraft::new(fields.entry_type);
    draft.title = fields.title;
    draft.price = fields.price;
    draft.amount = fields.amount;
    draft.note = fields.note;
    draft.tags = fields.tags.unwrap_or_default();

    let result = ctx.api.create_entry(draft)?;
    print_modification(ctx, &result)
}

/// Edit-load, overlay the given flags, save the whole entry back.
fn handle_edit(ctx: &mut AppContext, id: &str, fields: EditFields) -> Result<()> {
    let loaded = ctx.api.view_entry(id)?;
    let entry = loaded
        .listed_entries
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no entry with id {}", id))?;

    let draft = apply_edits(EntryDraft::from_entry(&entry), fields);
    let result = ctx.api.update_entry(&entry.id, draft)?;
    print_modification(ctx, &result)
}

fn apply_edits(mut draft: EntryDraft, fields: EditFields) -> EntryDraft {
    if let Some(entry_type) = fields.entry_type {
        draft.entry_type = Some(entry_type);
    }
    if let Some(title) = fields.title {
        draft.title = Some(title);
    }
    if fields.clear_price {
        draft.price = None;
    } else if let Some(price) = fields.price {
        draft.price = Some(price);
    }
    if fields.clear_amount {
        draft.amount = None;
    } else if let Some(amount) = fields.amount {
        draft.amount = Some(amount);
    }
    if let Some(note) = fields.note {
        draft.note = Some(note);
    }
    if let Some(tags) = fields.tags {
        draft.tags = tags;
    }
    draft
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_entry(id)?;
    print_modification(ctx, &result)
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.tags()?;
    match ctx.output {
        OutputMode::Json => print!("{}", render_json(&result.tags)?),
        _ => print!("{}", render_tags(&ctx.renderer, &result.tags)?),
    }
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    let status = result
        .status
        .as_ref()
        .ok_or_else(|| anyhow!("status unavailable"))?;
    match ctx.output {
        OutputMode::Json => print!("{}", render_json(status)?),
        _ => print!("{}", render_status(&ctx.renderer, status)?),
    }
    Ok(())
}

fn list_context<'a>(ctx: &'a AppContext, empty_message: &'static str) -> ListContext<'a> {
    ListContext {
        currency: &ctx.config.currency,
        today: Local::now().date_naive(),
        demo_notice: ctx.source.is_demo().then(|| {
            format!(
                "{} (showing {})",
                DEMO_WARNING,
                ctx.source.path.display()
            )
        }),
        empty_message,
    }
}

fn print_entries(
    ctx: &AppContext,
    result: &CmdResult,
    empty_message: &'static str,
) -> Result<()> {
    if ctx.output == OutputMode::Json {
        print!("{}", render_json(result)?);
        return Ok(());
    }
    let list_ctx = list_context(ctx, empty_message);
    print!(
        "{}",
        render_entries(&ctx.renderer, &result.listed_entries, &list_ctx)?
    );
    print!("{}", render_messages(&ctx.renderer, &result.messages)?);
    Ok(())
}

/// Messages first, then the affected entry as a card.
fn print_modification(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.output == OutputMode::Json {
        print!("{}", render_json(result)?);
        return Ok(());
    }
    print!("{}", render_messages(&ctx.renderer, &result.messages)?);
    if !result.affected_entries.is_empty() {
        let list_ctx = ListContext {
            demo_notice: None,
            ..list_context(ctx, "")
        };
        println!();
        print!(
            "{}",
            render_entries(&ctx.renderer, &result.affected_entries, &list_ctx)?
        );
    }
    Ok(())
}

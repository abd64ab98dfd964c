//! # CLI Layer
//!
//! This module is **one possible UI client** for propsearch. It parses
//! arguments, builds the session, calls the API, and prints `CmdResult`s.
//! It is the only code that touches stdout/stderr or exit codes.

use super::print::{
    print_config, print_detail, print_home, print_locations, print_messages, print_properties,
};
use super::setup::{Cli, Commands, FavCommands, SearchArgs};
use clap::Parser;
use directories::ProjectDirs;
use propsearch::api::{CmdResult, ConfigAction, PropsearchApi};
use propsearch::catalog::Catalog;
use propsearch::config::AppConfig;
use propsearch::criteria::CriteriaUpdate;
use propsearch::error::{PropsearchError, Result};
use propsearch::logging;
use propsearch::store::fs::FileStore;
use std::path::PathBuf;
use tracing::warn;

/// Overrides the platform data directory.
const HOME_ENV: &str = "PROPSEARCH_HOME";

struct AppContext {
    api: PropsearchApi<FileStore>,
    config: AppConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Home) | None => handle_home(&ctx),
        Some(Commands::Search(args)) => handle_search(&mut ctx, args),
        Some(Commands::Reset) => handle_reset(&mut ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Open { path }) => handle_open(&ctx, &path),
        Some(Commands::Locations) => handle_locations(&ctx),
        Some(Commands::Fav { action }) => handle_fav(&mut ctx, action),
        Some(Commands::Drag {
            source,
            destination,
            id,
        }) => handle_drag(&mut ctx, &source, &destination, &id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "propsearch", "propsearch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PropsearchError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = AppConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        AppConfig::default()
    });

    let catalog = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };

    let store = FileStore::new(data_dir.clone());
    let api = PropsearchApi::new(store, catalog, data_dir);
    Ok(AppContext { api, config })
}

fn print_listing(ctx: &AppContext, result: &CmdResult) {
    print_properties(
        &result.listed_properties,
        |id| ctx.api.is_favorite(id),
        &ctx.config,
    );
    print_messages(&result.messages);
}

fn print_result(ctx: &AppContext, result: &CmdResult) {
    if let Some(summary) = &result.home {
        print_home(summary);
    }
    if let Some(property) = &result.detail {
        print_detail(property, ctx.api.is_favorite(&property.id), &ctx.config);
    }
    if !result.listed_properties.is_empty() {
        print_properties(
            &result.listed_properties,
            |id| ctx.api.is_favorite(id),
            &ctx.config,
        );
    }
    print_messages(&result.messages);
}

fn handle_home(ctx: &AppContext) -> Result<()> {
    print_result(ctx, &ctx.api.home());
    Ok(())
}

fn criteria_updates(args: &SearchArgs) -> Vec<CriteriaUpdate> {
    let mut updates = Vec::new();
    if let Some(t) = args.property_type {
        updates.push(CriteriaUpdate::SetType(Some(t)));
    }
    if let Some(location) = &args.location {
        updates.push(CriteriaUpdate::SetLocation(Some(location.clone())));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        updates.push(CriteriaUpdate::SetPriceRange {
            min: args.min_price,
            max: args.max_price,
        });
    }
    if args.min_beds.is_some() || args.max_beds.is_some() {
        updates.push(CriteriaUpdate::SetBedroomRange {
            min: args.min_beds,
            max: args.max_beds,
        });
    }
    if args.after.is_some() || args.before.is_some() {
        updates.push(CriteriaUpdate::SetDateRange {
            after: args.after,
            before: args.before,
        });
    }
    updates
}

fn handle_search(ctx: &mut AppContext, args: SearchArgs) -> Result<()> {
    let updates = criteria_updates(&args);
    let result = if updates.is_empty() {
        ctx.api.results()
    } else {
        ctx.api.search_with(updates, args.refine)
    };
    print_listing(ctx, &result);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.reset();
    print_listing(ctx, &result);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    print_result(ctx, &ctx.api.show(id));
    Ok(())
}

fn handle_open(ctx: &AppContext, path: &str) -> Result<()> {
    let result = ctx.api.open(path)?;
    print_result(ctx, &result);
    Ok(())
}

fn handle_locations(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.locations();
    print_locations(&result.locations);
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, action: Option<FavCommands>) -> Result<()> {
    let result = match action {
        None | Some(FavCommands::List) => {
            let result = ctx.api.favorites();
            print_listing(ctx, &result);
            return Ok(());
        }
        Some(FavCommands::Toggle { id }) => ctx.api.toggle_favorite(&id),
        Some(FavCommands::Add { id }) => ctx.api.add_favorite(&id),
        Some(FavCommands::Remove { id }) => ctx.api.remove_favorite(&id),
        Some(FavCommands::Clear) => ctx.api.clear_favorites(),
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_drag(ctx: &mut AppContext, source: &str, destination: &str, id: &str) -> Result<()> {
    let destination = match destination.trim().to_lowercase().as_str() {
        "none" | "-" | "" => None,
        _ => Some(destination),
    };
    let result = ctx.api.drag(source, destination, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config, result.config_path.as_deref());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

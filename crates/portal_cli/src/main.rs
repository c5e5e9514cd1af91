//! Command-line host for the portal core.
//!
//! # Responsibility
//! - Wire configuration, logging, the fixture store and preferences into an
//!   `App`, then print pages and search results as plain text.
//! - Keep every page decision in `portal_core`; this binary only parses
//!   flags and renders.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;
use portal_core::fixture::ALL_FIXTURES;
use portal_core::{
    init_logging, Action, App, DataSource, FixtureStatus, FixtureStore, Key, KeyPress,
    PersistentEnvironment, PortalConfig, Renderer, SqlitePreferenceRepository, TextRenderer,
};
use std::path::PathBuf;

type PortalApp = App<PersistentEnvironment<SqlitePreferenceRepository>>;

const MAX_MONTH_OFFSET: i64 = 1200;

#[derive(Parser)]
#[command(name = "portal")]
#[command(about = "Static community portal rendered in the terminal", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Fixture directory or base URL
    #[arg(long, global = true)]
    data: Option<String>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rotated log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// SQLite file holding UI preferences
    #[arg(long, global = true)]
    prefs_db: Option<PathBuf>,
    /// Pins "today" (YYYY-MM-DD)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one page
    Page {
        /// Page stem: index, professions, practices, members, changelog,
        /// glossary, rfc, events, onboarding
        #[arg(default_value = "index")]
        stem: String,
        /// URL fragment selecting a detail
        #[arg(long)]
        hash: Option<String>,
        /// Filter as key=value; repeatable
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,
        /// View mode (grid, matrix, list, calendar)
        #[arg(long)]
        view: Option<String>,
        /// Glossary search text
        #[arg(long)]
        search: Option<String>,
        /// Record id to open
        #[arg(long)]
        select: Option<String>,
        /// Calendar day to select
        #[arg(long)]
        day: Option<u32>,
        /// Months to move the calendar cursor (negative goes back), at most
        /// 100 years either way
        #[arg(
            long,
            allow_hyphen_values = true,
            value_parser = clap::value_parser!(i32).range(-MAX_MONTH_OFFSET..=MAX_MONTH_OFFSET)
        )]
        month_offset: Option<i32>,
        /// FAQ item to expand, zero-based; repeatable
        #[arg(long)]
        faq: Vec<usize>,
        /// Print the page's copyable text instead of the page
        #[arg(long)]
        export: bool,
    },
    /// Global search across practices, RFCs, members, events and glossary
    Search {
        query: String,
        /// Print raw result items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Preload every fixture and report its status
    Status,
    /// Persist the header profession selector
    SelectProfession { profession: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_logging(&config.log_level, &config.log_dir_arg())
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;
    info!(
        "event=cli_start module=cli status=ok data={} prefs={}",
        config.data_source,
        config
            .preferences_db
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "memory".to_string())
    );

    let mut app = build_app(&config, cli.today)?;
    match cli.command {
        Commands::Page {
            stem,
            hash,
            filters,
            view,
            search,
            select,
            day,
            month_offset,
            faq,
            export,
        } => {
            let target = match hash {
                Some(hash) => format!("{stem}#{hash}"),
                None => stem,
            };
            app.navigate(&target)
                .with_context(|| format!("cannot open `{target}`"))?;

            let mut actions = Vec::new();
            for filter in &filters {
                let Some((key, value)) = filter.split_once('=') else {
                    bail!("filter `{filter}` must look like key=value");
                };
                actions.push(Action::filter(key.trim(), value.trim()));
            }
            if let Some(view) = view {
                actions.push(Action::SetView(view));
            }
            if let Some(search) = search {
                actions.push(Action::SetSearch(search));
            }
            let offset = month_offset.unwrap_or(0);
            let step = if offset < 0 {
                Action::PrevMonth
            } else {
                Action::NextMonth
            };
            actions.extend(std::iter::repeat(step).take(offset.unsigned_abs() as usize));
            actions.extend(faq.into_iter().map(Action::ToggleFaq));
            if let Some(day) = day {
                actions.push(Action::SelectDay(day));
            }
            if let Some(select) = select {
                actions.push(Action::Select(select));
            }
            for action in actions {
                app.apply(action);
            }

            if export {
                match app.export() {
                    Some(text) => println!("{text}"),
                    None => bail!("page `{}` has nothing to export", app.page_kind()),
                }
            } else if let Some(view) = app.view() {
                print!("{}", TextRenderer::new().render_page(&view));
            }
        }
        Commands::Search { query, json } => {
            app.preload_all();
            app.handle_key(KeyPress::ctrl(Key::Char('k')));
            app.set_search_query(&query);
            if json {
                let items = app.search().outcome().items();
                println!("{}", serde_json::to_string_pretty(items)?);
            } else if let Some(panel) = app.search_panel() {
                print!("{}", TextRenderer::new().render_search(&panel));
            }
        }
        Commands::Status => {
            app.preload_all();
            for name in ALL_FIXTURES {
                match app.store().status(name) {
                    FixtureStatus::Loaded => println!("{name}\tloaded"),
                    FixtureStatus::NotRequested => println!("{name}\tnot requested"),
                    FixtureStatus::Failed(reason) => println!("{name}\tfailed: {reason}"),
                }
            }
        }
        Commands::SelectProfession { profession } => {
            app.select_profession(&profession);
            println!("selectedProfession={profession}");
        }
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<PortalConfig> {
    let mut config = PortalConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(data) = &cli.data {
        config.data_source = DataSource::parse(data);
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    if let Some(db) = &cli.prefs_db {
        config.preferences_db = Some(db.clone());
    }
    config.validate()?;
    Ok(config)
}

fn build_app(config: &PortalConfig, today: Option<NaiveDate>) -> Result<PortalApp> {
    let repo = match &config.preferences_db {
        Some(path) => SqlitePreferenceRepository::open(path)
            .with_context(|| format!("failed to open preferences `{}`", path.display()))?,
        None => SqlitePreferenceRepository::in_memory()
            .context("failed to open in-memory preferences")?,
    };
    let mut env = PersistentEnvironment::new(repo);
    if let Some(today) = today {
        env = env.with_today(today);
    }
    let store = FixtureStore::new(config.data_source.open());
    Ok(App::new(store, env))
}

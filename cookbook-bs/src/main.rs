//! cookbook-bs (Budget Selector) - interactive page session
//!
//! Reads user events from stdin, one per line, and after each event writes
//! the page markup to an HTML file and prints the status line.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cookbook_bs::session::{self, Command, HELP};
use cookbook_bs::{BudgetSelector, SelectorOptions};
use cookbook_common::config::{self, SaveMode, TomlConfig, STORE_FILE_NAME};
use cookbook_common::source::Origin;
use cookbook_common::{Locale, SiteClient, SqliteStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Command-line arguments for cookbook-bs
#[derive(Parser, Debug)]
#[command(name = "cookbook-bs")]
#[command(about = "Filter recipes by budget and save one for the recipe viewer")]
#[command(version)]
struct Args {
    /// Root folder holding storage and rendered pages
    #[arg(short, long)]
    root_folder: Option<PathBuf>,

    /// Site origin: http(s) base URL or a directory containing json/
    #[arg(short, long)]
    base: Option<String>,

    /// Config file (default: <config_dir>/cookbook/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Message language (zh-TW or en)
    #[arg(long)]
    locale: Option<Locale>,

    /// Save strategy (details or merge)
    #[arg(long)]
    save_mode: Option<SaveMode>,

    /// Also write data.json into this folder on every save
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Where the page markup is written (default: <root>/budget.html)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let toml_config = TomlConfig::load(args.config.as_deref());
    init_tracing(toml_config.log_level.as_deref());

    info!("Starting cookbook budget selector v{}", env!("CARGO_PKG_VERSION"));

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref(), &toml_config);
    let base = config::resolve_base(args.base.as_deref(), &toml_config);
    info!("Root folder: {}", root_folder.display());
    info!("Site origin: {}", base);

    let store = SqliteStore::open(&root_folder.join(STORE_FILE_NAME))
        .await
        .context("Failed to open local storage")?;
    let source = SiteClient::new(Origin::parse(&base)?).context("Failed to create HTTP client")?;

    let export_dir = args.export_dir.or_else(|| {
        toml_config.save.export.then(|| {
            toml_config
                .save
                .export_dir
                .clone()
                .unwrap_or_else(|| root_folder.clone())
        })
    });
    let options = SelectorOptions {
        locale: args.locale.unwrap_or(toml_config.locale),
        save_mode: args.save_mode.unwrap_or(toml_config.save.mode),
        export_dir,
    };
    let default_export_dir = options
        .export_dir
        .clone()
        .unwrap_or_else(|| root_folder.clone());
    let out = args.out.unwrap_or_else(|| root_folder.join("budget.html"));

    let mut selector = BudgetSelector::new(Arc::new(source), Arc::new(store), options);
    selector.load_catalog().await;
    show(&selector, &out).await?;
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            if !line.trim().is_empty() {
                println!("{}", HELP);
            }
            continue;
        };
        if command == Command::Help {
            println!("{}", HELP);
            continue;
        }
        if !session::apply(&mut selector, command, &default_export_dir).await {
            break;
        }
        show(&selector, &out).await?;
    }

    info!("Budget selector session ended");
    Ok(())
}

/// Write the page markup and echo the visible state to the terminal
async fn show(selector: &BudgetSelector, out: &Path) -> Result<()> {
    let html = selector.render_page().context("Failed to render page")?;
    if let Some(parent) = out.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(out, html)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!("{}", selector.status());
    for r in selector.visible() {
        let marker = if selector.selected().map(|s| s.id) == Some(r.id) { '*' } else { ' ' };
        println!("{} [{}] {} ({})", marker, r.id, r.name, r.estimated_cost);
    }
    Ok(())
}

fn init_tracing(configured_level: Option<&str>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| configured_level.unwrap_or("info").into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

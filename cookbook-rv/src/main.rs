//! cookbook-rv (Recipe Viewer) - interactive page session
//!
//! Arrow keys (then Enter), `h`/`l`, or a page number navigate. After each
//! event the page markup is written to an HTML file and the counter and
//! shareable address are printed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cookbook_common::config::{self, TomlConfig, STORE_FILE_NAME};
use cookbook_common::source::Origin;
use cookbook_common::{Locale, SiteClient, SqliteStore};
use cookbook_rv::address::DEFAULT_ADDRESS;
use cookbook_rv::keys;
use cookbook_rv::{PageAddress, RecipeViewer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Command-line arguments for cookbook-rv
#[derive(Parser, Debug)]
#[command(name = "cookbook-rv")]
#[command(about = "Page through the saved recipe document")]
#[command(version)]
struct Args {
    /// Page address, e.g. "recipe.html?data=./json/other.json#p=3"
    #[arg(default_value = DEFAULT_ADDRESS)]
    address: String,

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

    /// Where the page markup is written (default: <root>/recipe.html)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let toml_config = TomlConfig::load(args.config.as_deref());
    init_tracing(toml_config.log_level.as_deref());

    info!("Starting cookbook recipe viewer v{}", env!("CARGO_PKG_VERSION"));

    let root_folder = config::resolve_root_folder(args.root_folder.as_deref(), &toml_config);
    let base = config::resolve_base(args.base.as_deref(), &toml_config);
    info!("Root folder: {}", root_folder.display());
    info!("Site origin: {}", base);

    let store = SqliteStore::open(&root_folder.join(STORE_FILE_NAME))
        .await
        .context("Failed to open local storage")?;
    let source = SiteClient::new(Origin::parse(&base)?).context("Failed to create HTTP client")?;
    let locale = args.locale.unwrap_or(toml_config.locale);
    let out = args.out.unwrap_or_else(|| root_folder.join("recipe.html"));

    let mut viewer =
        RecipeViewer::load(&source, &store, PageAddress::parse(&args.address), locale).await;
    show(&viewer, &out).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    'session: while let Some(line) = lines.next_line().await? {
        let events = keys::parse_line(&line);
        if events.is_empty() {
            continue;
        }
        for key in events {
            if !viewer.handle_key(key) {
                break 'session;
            }
        }
        show(&viewer, &out).await?;
    }

    info!("Recipe viewer session ended at {}", viewer.address());
    Ok(())
}

/// Write the page markup and echo counter, items and address
async fn show(viewer: &RecipeViewer, out: &Path) -> Result<()> {
    let html = viewer.render_page().context("Failed to render page")?;
    if let Some(parent) = out.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(out, html)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!("{}", viewer.counter());
    for item in viewer.current_items() {
        match (&item.step, &item.narrate) {
            (Some(step), Some(narrate)) => println!("  {}: {}", step, narrate),
            (Some(text), None) | (None, Some(text)) => println!("  {}", text),
            (None, None) => {}
        }
    }
    println!("{}", viewer.address());
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

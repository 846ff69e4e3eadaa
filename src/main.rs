#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use inkfox_core::{JsonlMailingList, Site};
use inkfox_ui::Newsletter;

/// Site content, loaded once at startup
static SITE: OnceLock<Site> = OnceLock::new();

/// Newsletter collaborator, if the mailing list could be opened
static NEWSLETTER: OnceLock<Newsletter> = OnceLock::new();

/// Get the site configuration (built-in content until startup sets it)
pub fn get_site() -> &'static Site {
    SITE.get_or_init(Site::builtin)
}

/// Get the newsletter collaborator, if one was configured
pub fn get_newsletter() -> Option<Newsletter> {
    NEWSLETTER.get().cloned()
}

/// InkFox - boutique publishing catalog
#[derive(Parser, Debug)]
#[command(name = "inkfox-desktop")]
#[command(about = "InkFox - boutique publishing catalog")]
struct Args {
    /// Site content file (JSON); defaults to the built-in catalog
    #[arg(short, long)]
    site: Option<PathBuf>,

    /// Data directory for the newsletter mailing list
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default data directory (<platform data dir>/inkfox)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inkfox")
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let site = match &args.site {
        Some(path) => {
            Site::load(path).with_context(|| format!("Failed to load site from {:?}", path))?
        }
        None => Site::builtin(),
    };

    for anchor in site.dangling_anchors() {
        tracing::warn!("Footer link '#{}' has no matching section", anchor);
    }

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let list_path = data_dir.join("newsletter.jsonl");
    match JsonlMailingList::open(&list_path) {
        Ok(list) => {
            let _ = NEWSLETTER.set(Newsletter::new(list));
        }
        Err(e) => {
            // The page still renders; the form reports signups as unavailable.
            tracing::error!("Failed to open mailing list {:?}: {}", list_path, e);
        }
    }

    let title = site.title.clone();
    tracing::info!(
        "Starting '{}' ({} sections, {} items) with data dir: {:?}",
        title,
        site.sections.len(),
        site.item_count(),
        data_dir
    );
    let _ = SITE.set(site);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

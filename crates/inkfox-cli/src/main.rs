//! InkFox CLI
//!
//! Static export and content tooling for the InkFox catalog site.
//!
//! ## Usage
//!
//! ```bash
//! # Render the landing page to a standalone HTML file
//! inkfox render --out site/index.html
//!
//! # Render a custom site file to stdout
//! inkfox --site my-site.json render
//!
//! # List sections with item counts
//! inkfox sections
//!
//! # Validate a site file and report unresolved footer links
//! inkfox --site my-site.json check
//!
//! # Write the built-in site as a JSON starting point
//! inkfox init-site --out my-site.json
//!
//! # Add an address to a JSONL mailing list
//! inkfox subscribe reader@example.com --list newsletter.jsonl
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inkfox_core::{subscribe, JsonlMailingList, MailingList, Site, SubscribeOutcome};

/// InkFox - boutique publishing catalog tooling
#[derive(Parser)]
#[command(name = "inkfox")]
#[command(version = "0.1.0")]
#[command(about = "InkFox - boutique publishing catalog tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Site content file (JSON); defaults to the built-in catalog
    #[arg(short, long, global = true)]
    site: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the landing page as a standalone HTML document
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List sections with their item counts
    Sections,

    /// Validate the site and report unresolved footer links
    Check,

    /// Write the built-in site as pretty JSON
    InitSite {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Add an email address to a JSONL mailing list
    Subscribe {
        /// Address to subscribe
        email: String,

        /// Mailing list file
        #[arg(short, long)]
        list: PathBuf,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_site(path: Option<&Path>) -> Result<Site> {
    match path {
        Some(path) => {
            Site::load(path).with_context(|| format!("Failed to load site from {:?}", path))
        }
        None => Ok(Site::builtin()),
    }
}

/// Write `contents` to `out`, or to stdout when no path is given
fn emit(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {:?}", parent))?;
                }
            }
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {:?}", path))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", contents),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Render { out } => {
            let site = load_site(cli.site.as_deref())?;
            let document = inkfox_ui::render_document(&site);
            tracing::info!("Rendered {} sections", site.sections.len());
            emit(out.as_deref(), &document)?;
        }

        Commands::Sections => {
            let site = load_site(cli.site.as_deref())?;
            for section in &site.sections {
                let trailer = section
                    .trailer
                    .as_ref()
                    .map(|t| t.kind())
                    .unwrap_or("none");
                println!(
                    "{:<12} {:<12} items: {:<3} trailer: {}",
                    section.id,
                    section.heading,
                    section.items.len(),
                    trailer
                );
            }
        }

        Commands::Check => {
            let site = load_site(cli.site.as_deref())?;
            println!(
                "ok: {} sections, {} items",
                site.sections.len(),
                site.item_count()
            );
            for anchor in site.dangling_anchors() {
                println!("warning: footer link '#{}' has no matching section", anchor);
            }
        }

        Commands::InitSite { out } => {
            let json = Site::builtin().to_json_pretty()?;
            emit(out.as_deref(), &format!("{}\n", json))?;
        }

        Commands::Subscribe { email, list } => {
            let mailing_list = JsonlMailingList::open(&list)
                .with_context(|| format!("Failed to open mailing list {:?}", list))?;
            match subscribe(&mailing_list, &email)? {
                SubscribeOutcome::Subscribed => println!("Subscribed {}", email.trim()),
                SubscribeOutcome::AlreadySubscribed => {
                    println!("Already subscribed: {}", email.trim())
                }
            }
            println!("Subscribers: {}", mailing_list.len()?);
        }
    }

    Ok(())
}

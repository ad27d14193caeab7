// ABOUTME: CLI for running the Goldfish and MTGAZone deck-list parsers over saved HTML pages.
// ABOUTME: Prints JSON for listings, single deck pages, or a whole format assembled from a page directory.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use mtgscrape_deck::{Deck, FormatDecks, Links, Metagame};
use serde_json::{json, Value};
use url::Url;

/// Extract deck lists from saved MTGGoldfish and MTGAZone pages.
#[derive(Parser, Debug)]
#[command(name = "mtgscrape")]
#[command(about = "Parse saved deck-site pages and print JSON", long_about = None)]
struct Args {
    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deck links from a Goldfish metagame page.
    GoldfishLinks {
        /// HTML file, or "-" for stdin.
        target: String,

        /// Keep decks named only after a color combination (e.g. "UW").
        #[arg(long)]
        keep_color_names: bool,
    },

    /// Name and boards of a Goldfish deck page.
    GoldfishDeck {
        /// HTML file, or "-" for stdin.
        target: String,
    },

    /// Deck links from the MTGAZone metagame page.
    MtgazoneLinks {
        /// HTML file, or "-" for stdin.
        target: String,

        /// Print the links of every format table instead of the first one.
        #[arg(long)]
        all_formats: bool,
    },

    /// Boards of an MTGAZone deck page; prints null for non-deck pages.
    MtgazoneDeck {
        /// HTML file, or "-" for stdin.
        target: String,
    },

    /// Assemble one format from a listing page and a directory of saved deck pages.
    ///
    /// Each link is looked up as <PAGES>/<last URL path segment>.html.
    Format {
        #[arg(long, value_enum)]
        site: Site,

        /// Format name used as the key of the output (e.g. "modern").
        #[arg(long = "format")]
        format_name: String,

        /// Saved listing page.
        #[arg(long)]
        listing: PathBuf,

        /// Directory holding the saved deck pages.
        #[arg(long)]
        pages: PathBuf,

        /// Keep decks named only after a color combination (Goldfish only).
        #[arg(long)]
        keep_color_names: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Site {
    Goldfish,
    Mtgazone,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let output = match args.command {
        Command::GoldfishLinks {
            target,
            keep_color_names,
        } => {
            let html = load_text(&target)?;
            json!(mtgscrape_goldfish::collect_links(&html, !keep_color_names)?)
        }
        Command::GoldfishDeck { target } => {
            let html = load_text(&target)?;
            json!(mtgscrape_goldfish::parse_deck_page(&html)?)
        }
        Command::MtgazoneLinks {
            target,
            all_formats,
        } => {
            let html = load_text(&target)?;
            if all_formats {
                json!(mtgscrape_mtgazone::collect_format_tables(&html)?)
            } else {
                json!(mtgscrape_mtgazone::collect_links(&html)?)
            }
        }
        Command::MtgazoneDeck { target } => {
            let html = load_text(&target)?;
            let lists = mtgscrape_mtgazone::parse_deck_page(&html)?;
            if lists.is_none() {
                info!("{} is not a deck page", target);
            }
            json!(lists)
        }
        Command::Format {
            site,
            format_name,
            listing,
            pages,
            keep_color_names,
        } => run_format(site, &format_name, &listing, &pages, keep_color_names)?,
    };

    if args.compact {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}

fn run_format(
    site: Site,
    format_name: &str,
    listing: &Path,
    pages: &Path,
    keep_color_names: bool,
) -> Result<Value> {
    let listing_html = fs::read_to_string(listing)
        .with_context(|| format!("reading listing {}", listing.display()))?;

    let links: Links = match site {
        Site::Goldfish => mtgscrape_goldfish::collect_links(&listing_html, !keep_color_names)?,
        Site::Mtgazone => mtgscrape_mtgazone::collect_links(&listing_html)?,
    };
    info!("{} links grabbed from {}", links.len(), listing.display());

    let mut decks = FormatDecks::new();
    let mut skipped = 0usize;
    let mut rejected = 0usize;

    for (name, link) in links.iter() {
        let path = match page_path(pages, link) {
            Ok(path) => path,
            Err(err) => {
                warn!("{}: {}", name, err);
                skipped += 1;
                continue;
            }
        };
        let html = match fs::read_to_string(&path) {
            Ok(html) => html,
            Err(err) => {
                warn!("{}: cannot read {}: {}", name, path.display(), err);
                skipped += 1;
                continue;
            }
        };

        match parse_page(site, name, &html) {
            Ok(Some(deck)) => {
                if decks.accept(name, deck).is_err() {
                    rejected += 1;
                }
            }
            Ok(None) => {
                warn!("{} is not a deck page and will not be saved", link);
                skipped += 1;
            }
            Err(err) => {
                warn!("{} will not be scraped: {}", link, err);
                skipped += 1;
            }
        }
    }

    let mut metagame = Metagame::new();
    metagame.insert(format_name, decks);

    Ok(json!({
        "formats": metagame.mainboards(),
        "sideboards": metagame.sideboards(),
        "total_links": links.len(),
        "skipped": skipped,
        "rejected": rejected,
    }))
}

fn parse_page(site: Site, name: &str, html: &str) -> mtgscrape_deck::Result<Option<Deck>> {
    match site {
        Site::Goldfish => mtgscrape_goldfish::parse_deck_page(html).map(Some),
        Site::Mtgazone => {
            mtgscrape_mtgazone::parse_deck_page(html).map(|lists| lists.map(|l| l.into_deck(name)))
        }
    }
}

/// Location of the saved page for `link`: the last non-empty path segment plus ".html".
fn page_path(pages: &Path, link: &str) -> Result<PathBuf> {
    let url = Url::parse(link).with_context(|| format!("invalid deck link {:?}", link))?;
    let slug = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| anyhow!("deck link {:?} has no path", link))?;
    Ok(pages.join(format!("{}.html", slug)))
}

fn load_text(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }

    if target.starts_with("http://") || target.starts_with("https://") {
        bail!("fetching is not supported, save the page and pass the file: {}", target);
    }

    let path = PathBuf::from(target);
    if !path.exists() {
        return Err(anyhow!("file not found: {}", target));
    }
    Ok(fs::read_to_string(path)?)
}

//! proxylist - compute the cards of a decklist that still need proxies
//!
//! Subtracts owned inventory (minus cards committed to other decks) from a
//! want list and prints the remainder.

use clap::{Parser, ValueEnum};
use deck_core::{free_inventory, reconcile, Deck, ReconcileOptions};
use proxylist::{load_all, load_deck, save_deck, Format, ProxyError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Cards of the deck not covered by the inventory
    Want,
    /// Inventory cards not committed to any owned deck
    Free,
}

/// Work out which cards of a decklist still need to be acquired or proxied
#[derive(Parser, Debug)]
#[command(name = "proxylist")]
#[command(version, about, long_about = None)]
struct Args {
    /// Want list to reconcile (required in `want` mode)
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Inventory file; repeat for several collections
    #[arg(short, long)]
    inventory: Vec<PathBuf>,

    /// Deck already built from the inventory; its cards are not available
    #[arg(long)]
    owned_deck: Vec<PathBuf>,

    /// Format of the want list and owned decks
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Format of the inventory files
    #[arg(long, value_enum, default_value_t = Format::Text)]
    inventory_format: Format,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    output_format: Format,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compare cards by name only
    #[arg(long, default_value_t = false)]
    ignore_versions: bool,

    /// Keep basic lands on the want list
    #[arg(long, default_value_t = false)]
    keep_basics: bool,

    /// Card treated as a basic land; repeat to replace the default list
    #[arg(long)]
    basic_land: Vec<String>,

    /// JSON file with reconcile options; flags given here take precedence
    #[arg(long)]
    options: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Mode::Want)]
    mode: Mode,
}

impl Args {
    fn reconcile_options(&self) -> Result<ReconcileOptions> {
        let mut options = match &self.options {
            Some(path) => read_options(path)?,
            None => ReconcileOptions::default(),
        };
        if self.ignore_versions {
            options.strip_versions = true;
        }
        if self.keep_basics {
            options.keep_basic_lands = true;
        }
        if !self.basic_land.is_empty() {
            options.basic_lands = self.basic_land.clone();
        }
        Ok(options)
    }
}

fn read_options(path: &Path) -> Result<ReconcileOptions> {
    let file = File::open(path)?;
    let options = serde_json::from_reader(BufReader::new(file))?;
    log::info!("Loaded options from {}", path.display());
    Ok(options)
}

fn write_result(deck: &Deck, args: &Args) -> Result<()> {
    match &args.output {
        Some(path) => save_deck(path, deck, args.output_format),
        None => {
            let writer = args.output_format.writer()?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            writer.write(&mut out, deck)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.reconcile_options()?;
    log::debug!("Options: {:?}", options);

    let inventories = load_all(&args.inventory, args.inventory_format);
    let committed = load_all(&args.owned_deck, args.format);

    let result = match args.mode {
        Mode::Want => {
            let path = args.deck.as_deref().ok_or_else(|| {
                ProxyError::MissingArgument("want mode needs --deck".to_string())
            })?;
            // The want list itself must load; inventories are best effort.
            let want = load_deck(path, args.format)?;
            reconcile(&want, &inventories, &committed, &options)
        }
        Mode::Free => {
            if let Some(path) = &args.deck {
                log::warn!("Ignoring --deck {} in free mode", path.display());
            }
            free_inventory(&inventories, &committed, &options)
        }
    };

    log::info!(
        "Result: {} main, {} side",
        result.number_cards_main(),
        result.number_cards_side()
    );
    write_result(&result, args)
}

fn main() {
    // Set RUST_LOG to control verbosity, e.g. RUST_LOG=deck_core=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting proxylist ({:?} mode)", args.mode);

    if let Err(e) = run(&args) {
        log::error!("proxylist failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use propsearch::model::PropertyType;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "propsearch", bin_name = "propsearch", version = get_version())]
#[command(about = "Search property listings and keep a list of favourites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overview of the catalog and your session
    Home,

    /// Search listings; without filters, shows the last results
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Clear all filters and show every listing
    Reset,

    /// Show one listing in detail
    #[command(alias = "v")]
    Show {
        /// Property id (e.g. prop1)
        id: String,
    },

    /// Open a view by path: /, /search or /property/<id>
    Open { path: String },

    /// List the locations available to filter on
    Locations,

    /// Manage favourites
    #[command(aliases = ["favs", "favourites"])]
    Fav {
        #[command(subcommand)]
        action: Option<FavCommands>,
    },

    /// Replay a drag-and-drop: drag <from> <to|none> <id>
    Drag {
        /// Zone the card was dragged from (propertyList, favoritesList)
        source: String,

        /// Zone it was dropped on, or "none" for outside every zone
        destination: String,

        /// Property id of the dragged card
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (catalog, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavCommands {
    /// List favourites
    #[command(alias = "ls")]
    List,

    /// Add the listing if it is not a favourite, remove it otherwise
    Toggle { id: String },

    /// Add a listing
    Add { id: String },

    /// Remove a listing
    #[command(alias = "rm")]
    Remove { id: String },

    /// Remove every favourite
    Clear,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// House or Flat
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub property_type: Option<PropertyType>,

    /// Exact location (see `propsearch locations`)
    #[arg(short, long)]
    pub location: Option<String>,

    /// Minimum price, e.g. 150000 or £150,000
    #[arg(long, value_parser = parse_price)]
    pub min_price: Option<u32>,

    /// Maximum price
    #[arg(long, value_parser = parse_price)]
    pub max_price: Option<u32>,

    /// Minimum bedrooms
    #[arg(long)]
    pub min_beds: Option<u32>,

    /// Maximum bedrooms
    #[arg(long)]
    pub max_beds: Option<u32>,

    /// Listed on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub after: Option<NaiveDate>,

    /// Listed on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub before: Option<NaiveDate>,

    /// Start from the last search instead of a blank one
    #[arg(short, long)]
    pub refine: bool,
}

/// Keeps only the digits, so `£1,250,000` reads as 1250000.
pub fn parse_price(raw: &str) -> Result<u32, String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(format!("'{}' is not a price", raw));
    }
    digits
        .parse()
        .map_err(|_| format!("'{}' is too large for a price", raw))
}

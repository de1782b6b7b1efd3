use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::prelude::{SortDirection, UserId};

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Simple User Directory")]
pub struct Cli {
    /// Users endpoint. Falls back to ROSTER_USERS_URL, then the public demo API
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Favorites file. Falls back to ROSTER_FAVORITES_PATH, then ./.instance/favorites.json
    #[arg(long, global = true)]
    pub favorites: Option<PathBuf>,

    /// Plain output; highlighted matches are shown in [brackets]
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log filter directive (warn, info, debug, ...)
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every user
    List {
        /// Order by name length (default is the order served by the endpoint)
        #[arg(long)]
        sort: Option<SortOrder>,
    },
    /// Show users whose name contains a term, ignoring case
    Search {
        /// Text to look for in user names
        term: String,

        /// Order by name length
        #[arg(long)]
        sort: Option<SortOrder>,
    },
    /// Mark or unmark a user as favorite
    Fav {
        /// User id as shown on the card (#id)
        id: UserId,
    },
    /// List favorite users only
    Favorites,
    /// Interactive session: search, sort and mark favorites
    Browse,
}

/// Name-length ordering
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Ascending,
            SortOrder::Desc => SortDirection::Descending,
        }
    }
}

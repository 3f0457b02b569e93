use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    ItemCommands, PhotoCommands, RestaurantCommands, SearchCommands, VisitCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Restaurants.
    Restaurant {
        #[command(subcommand)]
        action: RestaurantCommands,
    },
    /// List wishlist restaurants.
    Wishlist(WishlistArgs),
    /// List visited restaurants with their computed rating.
    Visited(VisitedArgs),
    /// Visits.
    Visit {
        #[command(subcommand)]
        action: VisitCommands,
    },
    /// Items eaten on a visit.
    Item {
        #[command(subcommand)]
        action: ItemCommands,
    },
    /// Photos attached to a visit.
    Photo {
        #[command(subcommand)]
        action: PhotoCommands,
    },
    /// Search restaurants or items.
    Search {
        #[command(subcommand)]
        action: SearchCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct WishlistArgs {
    /// Substring of the restaurant name.
    #[arg(long)]
    pub search: Option<String>,
    /// Cuisine tag (repeatable, any match).
    #[arg(long)]
    pub cuisine: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct VisitedArgs {
    /// Substring of the restaurant name.
    #[arg(long)]
    pub search: Option<String>,
    /// Cuisine tag (repeatable, any match).
    #[arg(long)]
    pub cuisine: Vec<String>,
    /// Computed rating: up, neutral, down (repeatable).
    #[arg(long)]
    pub thumb: Vec<String>,
    /// Service type of any visit: eat-in, takeaway, delivery (repeatable).
    #[arg(long)]
    pub service: Vec<String>,
    /// Keep restaurants with any visit on or after this date.
    #[arg(long)]
    pub from: Option<String>,
    /// Keep restaurants with any visit on or before this date.
    #[arg(long)]
    pub to: Option<String>,
    /// Sort: name, most-visited, rating, recently-visited (defaults to config).
    #[arg(long)]
    pub sort: Option<String>,
}

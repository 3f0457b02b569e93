use clap::{Args, Subcommand};

#[derive(Clone, Debug, Args)]
pub struct RestaurantSearchArgs {
    #[arg(long)]
    pub cuisine: Vec<String>,
    #[arg(long)]
    pub status: Option<String>,
    /// Computed rating (repeatable).
    #[arg(long)]
    pub thumb: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ItemSearchArgs {
    /// Item thumb (repeatable).
    #[arg(long)]
    pub thumb: Vec<String>,
    /// Restaurant cuisine tag (repeatable).
    #[arg(long)]
    pub cuisine: Vec<String>,
    /// Visit service type (repeatable).
    #[arg(long)]
    pub service: Vec<String>,
    /// Visit on or after this date.
    #[arg(long)]
    pub from: Option<String>,
    /// Visit on or before this date.
    #[arg(long)]
    pub to: Option<String>,
}

/// Search commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SearchCommands {
    /// Search restaurants by name.
    Restaurants {
        query: String,
        #[command(flatten)]
        filter: RestaurantSearchArgs,
    },
    /// Search items eaten by name.
    Items {
        query: String,
        #[command(flatten)]
        filter: ItemSearchArgs,
    },
}

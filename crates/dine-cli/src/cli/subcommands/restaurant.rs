use clap::Subcommand;

/// Restaurant commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RestaurantCommands {
    /// Add a restaurant (wishlist unless --status is given).
    Add {
        name: String,
        #[arg(long)]
        cuisine: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Update a restaurant.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Replaces all cuisine tags (repeatable).
        #[arg(long)]
        cuisine: Vec<String>,
        #[arg(long, conflicts_with = "cuisine")]
        clear_cuisines: bool,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, conflicts_with = "notes")]
        clear_notes: bool,
    },
    /// Set the status: wishlist, active, archived.
    Status { id: String, status: String },
    /// Delete a restaurant with all its visits.
    Delete { id: String },
    /// Show a restaurant with its summary and visit history.
    Show { id: String },
}

use clap::{Args, Subcommand};

/// Fields shared by `visit add` and `visit log`.
#[derive(Clone, Debug, Args)]
pub struct VisitFields {
    /// Visit date, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,
    /// eat-in, takeaway or delivery.
    #[arg(long)]
    pub service: Option<String>,
    /// Overall thumb: up, neutral, down.
    #[arg(long)]
    pub thumb: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Item eaten, as NAME or NAME:THUMB (repeatable).
    #[arg(long)]
    pub item: Vec<String>,
    /// Photo storage path (repeatable).
    #[arg(long)]
    pub photo: Vec<String>,
}

/// Visit commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VisitCommands {
    /// Record a visit to a restaurant by id.
    Add {
        restaurant_id: String,
        #[command(flatten)]
        visit: VisitFields,
    },
    /// Record a visit by restaurant name, creating the restaurant if needed.
    Log {
        name: String,
        #[command(flatten)]
        visit: VisitFields,
    },
    /// List visits of a restaurant.
    List { restaurant_id: String },
    /// Update a visit.
    Update {
        id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        service: Option<String>,
        #[arg(long)]
        thumb: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, conflicts_with = "notes")]
        clear_notes: bool,
    },
    /// Delete a visit with its items and photos.
    Delete { id: String },
    /// List items of a visit.
    Items { visit_id: String },
    /// List photos of a visit.
    Photos { visit_id: String },
}

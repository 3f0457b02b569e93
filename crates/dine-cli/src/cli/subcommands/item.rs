use clap::Subcommand;

/// Visit item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemCommands {
    /// Update an item.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        thumb: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long, conflicts_with = "notes")]
        clear_notes: bool,
    },
    /// Delete an item.
    Delete { id: String },
}

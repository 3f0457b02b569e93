use clap::Subcommand;

/// Visit photo commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PhotoCommands {
    /// Attach a photo to a visit.
    Add {
        visit_id: String,
        storage_path: String,
        #[arg(long)]
        caption: Option<String>,
    },
    /// Delete a photo.
    Delete { id: String },
}

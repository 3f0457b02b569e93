use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Restaurant { action } => commands::restaurant::handle(&action, ctx, flags).await,
        Commands::Wishlist(args) => commands::listing::wishlist(&args, ctx, flags).await,
        Commands::Visited(args) => commands::listing::visited(&args, ctx, flags).await,
        Commands::Visit { action } => commands::visit::handle(&action, ctx, flags).await,
        Commands::Item { action } => commands::item::handle(&action, ctx, flags).await,
        Commands::Photo { action } => commands::photo::handle(&action, ctx, flags).await,
        Commands::Search { action } => commands::search::handle(&action, ctx, flags).await,
    }
}

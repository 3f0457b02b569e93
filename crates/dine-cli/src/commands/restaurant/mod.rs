mod add;
mod delete;
mod show;
mod status;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RestaurantCommands;
use crate::context::AppContext;

/// Handle `dine restaurant`.
pub async fn handle(
    action: &RestaurantCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RestaurantCommands::Add {
            name,
            cuisine,
            notes,
            status,
        } => add::run(name, cuisine, notes.as_deref(), status.as_deref(), ctx, flags).await,
        RestaurantCommands::Update {
            id,
            name,
            cuisine,
            clear_cuisines,
            notes,
            clear_notes,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    name: name.clone(),
                    cuisines: cuisine.clone(),
                    clear_cuisines: *clear_cuisines,
                    notes: notes.clone(),
                    clear_notes: *clear_notes,
                },
                ctx,
                flags,
            )
            .await
        }
        RestaurantCommands::Status { id, status } => status::run(id, status, ctx, flags).await,
        RestaurantCommands::Delete { id } => delete::run(id, ctx, flags).await,
        RestaurantCommands::Show { id } => show::run(id, ctx, flags).await,
    }
}

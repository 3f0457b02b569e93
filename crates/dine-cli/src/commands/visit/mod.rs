mod add;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VisitCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dine visit`.
pub async fn handle(
    action: &VisitCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VisitCommands::Add {
            restaurant_id,
            visit,
        } => add::run_add(restaurant_id, visit, ctx, flags).await,
        VisitCommands::Log { name, visit } => add::run_log(name, visit, ctx, flags).await,
        VisitCommands::List { restaurant_id } => list::run_visits(restaurant_id, ctx, flags).await,
        VisitCommands::Update {
            id,
            date,
            service,
            thumb,
            notes,
            clear_notes,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    date: date.clone(),
                    service: service.clone(),
                    thumb: thumb.clone(),
                    notes: notes.clone(),
                    clear_notes: *clear_notes,
                },
                ctx,
                flags,
            )
            .await
        }
        VisitCommands::Delete { id } => {
            ctx.visits.delete_visit(id).await?;
            output(&DeletedResponse::new(id), flags.format)
        }
        VisitCommands::Items { visit_id } => list::run_items(visit_id, ctx, flags).await,
        VisitCommands::Photos { visit_id } => list::run_photos(visit_id, ctx, flags).await,
    }
}

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PhotoCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

/// Handle `dine photo`.
pub async fn handle(action: &PhotoCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PhotoCommands::Add {
            visit_id,
            storage_path,
            caption,
        } => {
            if storage_path.trim().is_empty() {
                anyhow::bail!("storage path must not be blank");
            }
            let photo = ctx
                .visits
                .add_photo_to_visit(visit_id, storage_path, caption.as_deref())
                .await?;
            output(&photo, flags.format)
        }
        PhotoCommands::Delete { id } => {
            ctx.visits.delete_photo(id).await?;
            output(&DeletedResponse::new(id), flags.format)
        }
    }
}

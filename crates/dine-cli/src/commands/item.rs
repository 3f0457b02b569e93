use dine_core::enums::Thumb;
use dine_db::updates::item::VisitItemUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ItemCommands;
use crate::commands::shared::deleted::DeletedResponse;
use crate::commands::shared::parse::{clearable, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `dine item`.
pub async fn handle(action: &ItemCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ItemCommands::Update {
            id,
            name,
            thumb,
            notes,
            clear_notes,
        } => {
            let notes = clearable(notes.as_deref(), *clear_notes);
            if name.is_none() && thumb.is_none() && notes.is_none() {
                anyhow::bail!(
                    "At least one of --name, --thumb, --notes, or --clear-notes must be provided"
                );
            }

            let mut builder = VisitItemUpdateBuilder::new();
            if let Some(name) = name.as_deref() {
                builder = builder.name(name.trim());
            }
            if let Some(thumb) = thumb.as_deref() {
                builder = builder.thumb(parse_enum::<Thumb>(thumb, "thumb")?);
            }
            if let Some(notes) = notes {
                builder = builder.notes(notes);
            }

            let item = ctx.visits.update_item(id, builder.build()).await?;
            output(&item, flags.format)
        }
        ItemCommands::Delete { id } => {
            ctx.visits.delete_item(id).await?;
            output(&DeletedResponse::new(id), flags.format)
        }
    }
}

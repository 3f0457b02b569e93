use dine_app::{PhotoDraft, VisitDraft};
use dine_core::enums::{ServiceType, Thumb};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VisitFields;
use crate::commands::shared::parse::{parse_item_flag, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run_add(
    restaurant_id: &str,
    fields: &VisitFields,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = build_draft(restaurant_id, fields)?;
    let visit = ctx.visits.add_visit(draft).await?;
    output(&visit, flags.format)
}

pub async fn run_log(
    name: &str,
    fields: &VisitFields,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = build_draft("", fields)?;
    let visit = ctx.visits.log_visit_by_name(name, draft).await?;
    output(&visit, flags.format)
}

fn build_draft(restaurant_id: &str, fields: &VisitFields) -> anyhow::Result<VisitDraft> {
    Ok(VisitDraft {
        restaurant_id: restaurant_id.to_string(),
        visit_date: fields.date.clone(),
        service_type: parse_opt_enum::<ServiceType>(fields.service.as_deref(), "service")?,
        overall_thumb: parse_opt_enum::<Thumb>(fields.thumb.as_deref(), "thumb")?,
        notes: fields.notes.clone(),
        items: fields.item.iter().map(|raw| parse_item_flag(raw)).collect(),
        photos: fields
            .photo
            .iter()
            .map(|path| PhotoDraft {
                storage_path: path.clone(),
                caption: None,
            })
            .collect(),
    })
}

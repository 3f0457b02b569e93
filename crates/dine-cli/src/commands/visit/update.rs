use dine_core::enums::{ServiceType, Thumb};
use dine_db::updates::visit::VisitUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{clearable, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub date: Option<String>,
    pub service: Option<String>,
    pub thumb: Option<String>,
    pub notes: Option<String>,
    pub clear_notes: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = VisitUpdateBuilder::new();
    if let Some(date) = params.date.as_deref() {
        builder = builder.visit_date(date.trim());
    }
    if let Some(service) = params.service.as_deref() {
        builder = builder.service_type(parse_enum::<ServiceType>(service, "service")?);
    }
    if let Some(thumb) = params.thumb.as_deref() {
        builder = builder.overall_thumb(parse_enum::<Thumb>(thumb, "thumb")?);
    }
    if let Some(notes) = clearable(params.notes.as_deref(), params.clear_notes) {
        builder = builder.notes(notes);
    }

    let visit = ctx.visits.update_visit(&params.id, builder.build()).await?;
    output(&visit, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.date.is_none()
        && params.service.is_none()
        && params.thumb.is_none()
        && params.notes.is_none()
        && !params.clear_notes
    {
        anyhow::bail!(
            "At least one of --date, --service, --thumb, --notes, or --clear-notes must be provided"
        );
    }
    Ok(())
}

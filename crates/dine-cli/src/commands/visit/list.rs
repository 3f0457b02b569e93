use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run_visits(
    restaurant_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let visits = ctx.visits.list_by_restaurant(restaurant_id).await?;
    output(&visits, flags.format)
}

pub async fn run_items(visit_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let items = ctx.visits.list_items_by_visit(visit_id).await?;
    output(&items, flags.format)
}

pub async fn run_photos(
    visit_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let photos = ctx.visits.list_photos_by_visit(visit_id).await?;
    output(&photos, flags.format)
}

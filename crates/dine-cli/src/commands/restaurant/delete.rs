use crate::cli::GlobalFlags;
use crate::commands::shared::deleted::DeletedResponse;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.restaurants.delete_restaurant(id).await?;
    output(&DeletedResponse::new(id), flags.format)
}

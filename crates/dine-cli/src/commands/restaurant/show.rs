use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let details = ctx.restaurants.restaurant_details(id).await?;
    output(&details, flags.format)
}

use dine_core::enums::RestaurantStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = parse_enum::<RestaurantStatus>(status, "status")?;
    let restaurant = ctx.restaurants.set_restaurant_status(id, status).await?;
    output(&restaurant, flags.format)
}

use dine_app::RestaurantDraft;
use dine_core::enums::RestaurantStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    cuisines: &[String],
    notes: Option<&str>,
    status: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_opt_enum::<RestaurantStatus>(status, "status")?;
    let restaurant = ctx
        .restaurants
        .add_restaurant(RestaurantDraft {
            name: name.to_string(),
            cuisines: cuisines.to_vec(),
            notes: notes.map(String::from),
            status,
        })
        .await?;
    output(&restaurant, flags.format)
}

use dine_app::{ListFilter, VisitedFilter};
use dine_core::enums::{ServiceType, Thumb, VisitedSort};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{VisitedArgs, WishlistArgs};
use crate::commands::shared::parse::{parse_enum_list, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `dine wishlist`.
pub async fn wishlist(args: &WishlistArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let restaurants = ctx
        .restaurants
        .list_wishlist(ListFilter {
            search: args.search.clone(),
            cuisines: args.cuisine.clone(),
        })
        .await?;
    output(&restaurants, flags.format)
}

/// Handle `dine visited`.
pub async fn visited(args: &VisitedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = VisitedFilter {
        search: args.search.clone(),
        cuisines: args.cuisine.clone(),
        thumbs: parse_enum_list::<Thumb>(&args.thumb, "thumb")?,
        service_types: parse_enum_list::<ServiceType>(&args.service, "service")?,
        from_date: args.from.clone(),
        to_date: args.to.clone(),
    };
    let sort = parse_opt_enum::<VisitedSort>(args.sort.as_deref(), "sort")?
        .unwrap_or(ctx.config.general.default_sort);

    let rows = ctx.restaurants.list_visited(filter, sort).await?;
    output(&rows, flags.format)
}

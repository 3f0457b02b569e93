use dine_app::{ItemSearchFilter, RestaurantSearchFilter};
use dine_core::enums::{RestaurantStatus, ServiceType, Thumb};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SearchCommands;
use crate::commands::shared::parse::{parse_enum_list, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `dine search`.
pub async fn handle(action: &SearchCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SearchCommands::Restaurants { query, filter } => {
            let filter = RestaurantSearchFilter {
                cuisines: filter.cuisine.clone(),
                status: parse_opt_enum::<RestaurantStatus>(filter.status.as_deref(), "status")?,
                thumbs: parse_enum_list::<Thumb>(&filter.thumb, "thumb")?,
            };
            let hits = ctx.search.search_restaurants(query, filter).await?;
            output(&hits, flags.format)
        }
        SearchCommands::Items { query, filter } => {
            let filter = ItemSearchFilter {
                thumbs: parse_enum_list::<Thumb>(&filter.thumb, "thumb")?,
                cuisines: filter.cuisine.clone(),
                service_types: parse_enum_list::<ServiceType>(&filter.service, "service")?,
                from_date: filter.from.clone(),
                to_date: filter.to.clone(),
            };
            let hits = ctx.search.search_items(query, filter).await?;
            output(&hits, flags.format)
        }
    }
}

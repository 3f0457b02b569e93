use dine_db::updates::restaurant::RestaurantUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::clearable;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub name: Option<String>,
    pub cuisines: Vec<String>,
    pub clear_cuisines: bool,
    pub notes: Option<String>,
    pub clear_notes: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = RestaurantUpdateBuilder::new();
    if let Some(name) = params.name.as_deref() {
        builder = builder.name(name);
    }
    if params.clear_cuisines {
        builder = builder.cuisines(Vec::new());
    } else if !params.cuisines.is_empty() {
        builder = builder.cuisines(params.cuisines.clone());
    }
    if let Some(notes) = clearable(params.notes.as_deref(), params.clear_notes) {
        builder = builder.notes(notes);
    }

    let restaurant = ctx
        .restaurants
        .update_restaurant(&params.id, builder.build())
        .await?;
    output(&restaurant, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.name.is_none()
        && params.cuisines.is_empty()
        && !params.clear_cuisines
        && params.notes.is_none()
        && !params.clear_notes
    {
        anyhow::bail!(
            "At least one of --name, --cuisine, --clear-cuisines, --notes, or --clear-notes must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Params, validate_update_params};

    fn empty() -> Params {
        Params {
            id: String::from("rest_1"),
            name: None,
            cuisines: Vec::new(),
            clear_cuisines: false,
            notes: None,
            clear_notes: false,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&empty()).is_err());
    }

    #[test]
    fn accepts_update_with_any_field() {
        let params = Params {
            clear_notes: true,
            ..empty()
        };
        assert!(validate_update_params(&params).is_ok());

        let params = Params {
            cuisines: vec![String::from("thai")],
            ..empty()
        };
        assert!(validate_update_params(&params).is_ok());
    }
}

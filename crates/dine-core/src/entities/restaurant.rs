use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RestaurantStatus;

/// A place on the wishlist or one that has been visited.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub status: RestaurantStatus,
    /// Cuisine tags. Order carries no meaning.
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Case-insensitive check against a set of cuisine tags. Matches if any tag is shared.
    #[must_use]
    pub fn has_any_cuisine(&self, wanted: &[String]) -> bool {
        wanted.iter().any(|want| {
            self.cuisines
                .iter()
                .any(|have| have.to_lowercase() == want.to_lowercase())
        })
    }

    /// Case-insensitive substring match on the name. The needle is trimmed first.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&needle.trim().to_lowercase())
    }
}

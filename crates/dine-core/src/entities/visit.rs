use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ServiceType, Thumb};

/// One recorded visit to a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: String,
    pub restaurant_id: String,
    /// Calendar date, `YYYY-MM-DD`. Compared lexicographically.
    pub visit_date: String,
    pub service_type: ServiceType,
    pub overall_thumb: Thumb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Visit {
    /// Whether the visit date lies within the optional inclusive bounds.
    #[must_use]
    pub fn within(&self, from_date: Option<&str>, to_date: Option<&str>) -> bool {
        from_date.is_none_or(|from| self.visit_date.as_str() >= from)
            && to_date.is_none_or(|to| self.visit_date.as_str() <= to)
    }
}

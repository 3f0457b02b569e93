//! Filter inputs for listing and search.
//!
//! Empty sets mean "no filter". Date bounds are inclusive `YYYY-MM-DD` strings.

use serde::{Deserialize, Serialize};

use dine_core::enums::{RestaurantStatus, ServiceType, Thumb};
use dine_core::errors::validate_visit_date;

use crate::error::AppError;

/// Name search and cuisine tags, shared by the wishlist listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
}

/// Filters for the visited listing.
///
/// `thumbs` applies to the computed restaurant thumb. The date bounds and
/// `service_types` are existential: a restaurant passes if any one of its
/// visits satisfies the condition, each bound checked on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub thumbs: Vec<Thumb>,
    #[serde(default)]
    pub service_types: Vec<ServiceType>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
}

impl VisitedFilter {
    #[must_use]
    pub fn list_filter(&self) -> ListFilter {
        ListFilter {
            search: self.search.clone(),
            cuisines: self.cuisines.clone(),
        }
    }

    /// Reject date bounds that are not `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first bad bound.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_bounds(self.from_date.as_deref(), self.to_date.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSearchFilter {
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub status: Option<RestaurantStatus>,
    /// Applied to the computed restaurant thumb.
    #[serde(default)]
    pub thumbs: Vec<Thumb>,
}

/// Per-item filters. Unlike [`VisitedFilter`], dates and service types are
/// checked against the one visit the item belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSearchFilter {
    /// Applied to the item's own thumb.
    #[serde(default)]
    pub thumbs: Vec<Thumb>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub service_types: Vec<ServiceType>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
}

impl ItemSearchFilter {
    /// Reject date bounds that are not `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first bad bound.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_bounds(self.from_date.as_deref(), self.to_date.as_deref())
    }
}

/// Bounds are compared to visit dates as strings, so they must be zero-padded.
fn validate_bounds(from_date: Option<&str>, to_date: Option<&str>) -> Result<(), AppError> {
    for (field, bound) in [("from date", from_date), ("to date", to_date)] {
        if let Some(date) = bound {
            validate_visit_date(date).map_err(|_| {
                AppError::Validation(format!("{field} '{date}' is not YYYY-MM-DD"))
            })?;
        }
    }
    Ok(())
}

/// Membership check where an empty set admits everything.
pub(crate) fn admits<T: PartialEq>(set: &[T], value: &T) -> bool {
    set.is_empty() || set.contains(value)
}

//! Derived views: per-restaurant summaries, listing rows and detail pages.

use std::cmp::Ordering;

use serde::Serialize;

use dine_core::entities::{Restaurant, Visit, VisitItem, VisitPhoto};
use dine_core::enums::{Thumb, VisitedSort};
use dine_core::rating::{RatingThresholds, ThumbsBreakdown, compute_restaurant_thumb, last_visited};

/// Aggregates computed from a restaurant's visit history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSummary {
    pub computed_thumb: Thumb,
    pub visit_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visited: Option<String>,
    pub thumbs_breakdown: ThumbsBreakdown,
}

impl RestaurantSummary {
    #[must_use]
    pub fn from_visits(visits: &[Visit], thresholds: RatingThresholds) -> Self {
        Self {
            computed_thumb: compute_restaurant_thumb(visits, thresholds),
            visit_count: visits.len(),
            last_visited: last_visited(visits),
            thumbs_breakdown: ThumbsBreakdown::from_visits(visits),
        }
    }
}

/// A row of the visited listing. Serializes as one flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitedRestaurant {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    #[serde(flatten)]
    pub summary: RestaurantSummary,
}

/// A restaurant search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSearchHit {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub computed_thumb: Thumb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_visited: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitDetails {
    #[serde(flatten)]
    pub visit: Visit,
    pub items: Vec<VisitItem>,
    pub photos: Vec<VisitPhoto>,
}

/// Everything known about one restaurant. Visits are newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    pub restaurant: Restaurant,
    pub summary: RestaurantSummary,
    pub visits: Vec<VisitDetails>,
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Stable sort of the visited listing.
pub(crate) fn sort_visited(rows: &mut [VisitedRestaurant], sort: VisitedSort) {
    rows.sort_by(|a, b| compare(a, b, sort));
}

fn compare(a: &VisitedRestaurant, b: &VisitedRestaurant, sort: VisitedSort) -> Ordering {
    match sort {
        VisitedSort::Name => a
            .restaurant
            .name
            .to_lowercase()
            .cmp(&b.restaurant.name.to_lowercase()),
        VisitedSort::MostVisited => b.summary.visit_count.cmp(&a.summary.visit_count),
        VisitedSort::Rating => b
            .summary
            .computed_thumb
            .rank()
            .cmp(&a.summary.computed_thumb.rank())
            .then_with(|| b.summary.visit_count.cmp(&a.summary.visit_count)),
        // Missing dates compare as "" and land last.
        VisitedSort::RecentlyVisited => {
            let a_last = a.summary.last_visited.as_deref().unwrap_or_default();
            let b_last = b.summary.last_visited.as_deref().unwrap_or_default();
            b_last.cmp(a_last)
        }
    }
}

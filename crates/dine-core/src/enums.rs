//! Status, sentiment, service and entity-kind enums for Dine.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Thumb
// ---------------------------------------------------------------------------

/// Ternary sentiment attached to a visit or an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Thumb {
    Down,
    #[default]
    Neutral,
    Up,
}

impl Thumb {
    pub const ALL: [Self; 3] = [Self::Down, Self::Neutral, Self::Up];

    /// Score used by the rating engine: up = +1, neutral = 0, down = -1.
    #[must_use]
    pub const fn score(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Neutral => 0,
            Self::Down => -1,
        }
    }

    /// Sort rank used when ordering restaurants by rating: up = 2, neutral = 1, down = 0.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Up => 2,
            Self::Neutral => 1,
            Self::Down => 0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Neutral => "neutral",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for Thumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RestaurantStatus
// ---------------------------------------------------------------------------

/// Lifecycle stage of a restaurant.
///
/// ```text
/// wishlist → active   (automatic on first visit)
/// any      → archived (manual)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RestaurantStatus {
    #[default]
    Wishlist,
    Active,
    Archived,
}

impl RestaurantStatus {
    /// Whether recording a visit should promote this status to `Active`.
    #[must_use]
    pub const fn promotes_on_visit(self) -> bool {
        matches!(self, Self::Wishlist)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wishlist => "wishlist",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for RestaurantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ServiceType
// ---------------------------------------------------------------------------

/// How the food of a visit was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    EatIn,
    Takeaway,
    Delivery,
}

impl ServiceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EatIn => "eat_in",
            Self::Takeaway => "takeaway",
            Self::Delivery => "delivery",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VisitedSort
// ---------------------------------------------------------------------------

/// Ordering of the visited-restaurants listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VisitedSort {
    /// Name, ascending.
    Name,
    /// Visit count, descending.
    MostVisited,
    /// Computed thumb rank descending, then visit count descending.
    Rating,
    /// Last visit date, descending. Restaurants without visits sort last.
    #[default]
    RecentlyVisited,
}

impl VisitedSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::MostVisited => "most_visited",
            Self::Rating => "rating",
            Self::RecentlyVisited => "recently_visited",
        }
    }
}

impl fmt::Display for VisitedSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// The four persisted entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Restaurant,
    Visit,
    VisitItem,
    VisitPhoto,
}

impl EntityKind {
    /// Id prefix for newly created entities of this kind.
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Restaurant => crate::ids::PREFIX_RESTAURANT,
            Self::Visit => crate::ids::PREFIX_VISIT,
            Self::VisitItem => crate::ids::PREFIX_ITEM,
            Self::VisitPhoto => crate::ids::PREFIX_PHOTO,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Visit => "visit",
            Self::VisitItem => "visit_item",
            Self::VisitPhoto => "visit_photo",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Thumb::Up, "\"up\"")]
    #[case(Thumb::Neutral, "\"neutral\"")]
    #[case(Thumb::Down, "\"down\"")]
    fn thumb_serializes_snake_case(#[case] thumb: Thumb, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&thumb).unwrap(), json);
        assert_eq!(thumb.to_string(), json.trim_matches('"'));
    }

    #[test]
    fn service_type_uses_snake_case() {
        assert_eq!(serde_json::to_string(&ServiceType::EatIn).unwrap(), "\"eat_in\"");
        let parsed: ServiceType = serde_json::from_str("\"takeaway\"").unwrap();
        assert_eq!(parsed, ServiceType::Takeaway);
    }

    #[test]
    fn only_wishlist_promotes() {
        assert!(RestaurantStatus::Wishlist.promotes_on_visit());
        assert!(!RestaurantStatus::Active.promotes_on_visit());
        assert!(!RestaurantStatus::Archived.promotes_on_visit());
    }

    #[test]
    fn rank_orders_up_over_neutral_over_down() {
        assert!(Thumb::Up.rank() > Thumb::Neutral.rank());
        assert!(Thumb::Neutral.rank() > Thumb::Down.rank());
    }

    #[test]
    fn defaults() {
        assert_eq!(RestaurantStatus::default(), RestaurantStatus::Wishlist);
        assert_eq!(Thumb::default(), Thumb::Neutral);
        assert_eq!(VisitedSort::default(), VisitedSort::RecentlyVisited);
    }

    #[test]
    fn entity_kind_prefixes() {
        assert_eq!(EntityKind::Restaurant.id_prefix(), "rest");
        assert_eq!(EntityKind::VisitPhoto.id_prefix(), "photo");
    }
}

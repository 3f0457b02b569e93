//! Listing, aggregation and search integration tests.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;

use dine_app::{
    ItemDraft, ItemSearchFilter, ListFilter, RestaurantDraft, RestaurantSearchFilter,
    RestaurantsUsecases, SearchUsecases, VisitDraft, VisitedFilter, VisitsUsecases,
};
use dine_core::enums::{RestaurantStatus, ServiceType, Thumb, VisitedSort};
use dine_core::rating::RatingThresholds;
use dine_db::DineService;

struct Fixture {
    restaurants: RestaurantsUsecases,
    visits: VisitsUsecases,
    search: SearchUsecases,
}

impl Fixture {
    fn new() -> Self {
        let service = Arc::new(DineService::in_memory());
        let thresholds = RatingThresholds::default();
        Self {
            restaurants: RestaurantsUsecases::new(Arc::clone(&service), thresholds),
            visits: VisitsUsecases::new(Arc::clone(&service)),
            search: SearchUsecases::new(service, thresholds),
        }
    }

    async fn restaurant(&self, name: &str, cuisines: &[&str]) -> String {
        self.restaurants
            .add_restaurant(RestaurantDraft {
                name: name.into(),
                cuisines: cuisines.iter().map(|c| (*c).to_string()).collect(),
                ..RestaurantDraft::default()
            })
            .await
            .unwrap()
            .id
    }

    async fn visit(&self, restaurant_id: &str, date: &str, thumb: Thumb, service: ServiceType) -> String {
        self.visits
            .add_visit(VisitDraft {
                restaurant_id: restaurant_id.into(),
                visit_date: date.into(),
                service_type: Some(service),
                overall_thumb: Some(thumb),
                ..VisitDraft::default()
            })
            .await
            .unwrap()
            .id
    }

    async fn visit_with_item(&self, restaurant_id: &str, date: &str, item: &str, thumb: Thumb) -> String {
        self.visits
            .add_visit(VisitDraft {
                restaurant_id: restaurant_id.into(),
                visit_date: date.into(),
                service_type: Some(ServiceType::EatIn),
                overall_thumb: Some(Thumb::Up),
                items: vec![ItemDraft {
                    name: item.into(),
                    thumb: Some(thumb),
                    notes: None,
                }],
                ..VisitDraft::default()
            })
            .await
            .unwrap()
            .id
    }

    async fn visited_names(&self, filter: VisitedFilter, sort: VisitedSort) -> Vec<String> {
        self.restaurants
            .list_visited(filter, sort)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.restaurant.name)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Wishlist / visited
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wishlist_and_visited_are_disjoint() {
    let fx = Fixture::new();
    let visited = fx.restaurant("Visited", &["thai"]).await;
    fx.restaurant("Someday", &["thai"]).await;
    fx.visit(&visited, "2024-01-01", Thumb::Up, ServiceType::EatIn).await;

    let wishlist = fx
        .restaurants
        .list_wishlist(ListFilter {
            cuisines: vec!["THAI".into()],
            ..ListFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].name, "Someday");

    let names = fx
        .visited_names(VisitedFilter::default(), VisitedSort::Name)
        .await;
    assert_eq!(names, vec!["Visited"]);
}

#[tokio::test]
async fn visited_never_includes_inactive_restaurants() {
    let fx = Fixture::new();
    let archived = fx.restaurant("Was Good", &[]).await;
    fx.visit(&archived, "2024-01-01", Thumb::Up, ServiceType::EatIn).await;
    fx.restaurants
        .set_restaurant_status(&archived, RestaurantStatus::Archived)
        .await
        .unwrap();
    let active = fx.restaurant("Still Good", &[]).await;
    fx.visit(&active, "2024-01-02", Thumb::Up, ServiceType::EatIn).await;
    fx.restaurant("Never Been", &[]).await;

    let rows = fx
        .restaurants
        .list_visited(VisitedFilter::default(), VisitedSort::RecentlyVisited)
        .await
        .unwrap();
    assert!(rows.iter().all(|r| r.restaurant.status == RestaurantStatus::Active));
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn from_date_matches_any_visit() {
    let fx = Fixture::new();
    let id = fx.restaurant("Two Visits", &[]).await;
    fx.visit(&id, "2024-02-01", Thumb::Up, ServiceType::EatIn).await;
    fx.visit(&id, "2024-03-01", Thumb::Up, ServiceType::EatIn).await;

    let names = fx
        .visited_names(
            VisitedFilter {
                from_date: Some("2024-02-15".into()),
                ..VisitedFilter::default()
            },
            VisitedSort::default(),
        )
        .await;
    assert_eq!(names, vec!["Two Visits"]);
}

#[tokio::test]
async fn unpadded_date_bound_is_rejected_not_misapplied() {
    let fx = Fixture::new();
    let id = fx.restaurant("March Only", &[]).await;
    fx.visit_with_item(&id, "2024-03-01", "Tamale", Thumb::Up).await;

    let listed = fx
        .restaurants
        .list_visited(
            VisitedFilter {
                from_date: Some("2024-2-15".into()),
                ..VisitedFilter::default()
            },
            VisitedSort::default(),
        )
        .await;
    assert!(listed.unwrap_err().is_validation());

    let searched = fx
        .search
        .search_items(
            "tamale",
            ItemSearchFilter {
                to_date: Some("2024-3-1".into()),
                ..ItemSearchFilter::default()
            },
        )
        .await;
    assert!(searched.unwrap_err().is_validation());
}

#[tokio::test]
async fn most_visited_orders_by_visit_count() {
    let fx = Fixture::new();
    for (name, count) in [("Five", 5), ("One", 1), ("Three", 3)] {
        let id = fx.restaurant(name, &[]).await;
        for day in 1..=count {
            fx.visit(&id, &format!("2024-01-{day:02}"), Thumb::Neutral, ServiceType::EatIn)
                .await;
        }
    }

    let rows = fx
        .restaurants
        .list_visited(VisitedFilter::default(), VisitedSort::MostVisited)
        .await
        .unwrap();
    let counts: Vec<_> = rows.iter().map(|r| r.summary.visit_count).collect();
    assert_eq!(counts, vec![5, 3, 1]);
}

#[rstest]
#[case::by_thumb(VisitedFilter { thumbs: vec![Thumb::Down], ..VisitedFilter::default() }, vec!["Bad"])]
#[case::by_service(VisitedFilter { service_types: vec![ServiceType::Delivery], ..VisitedFilter::default() }, vec!["Good"])]
#[case::by_to_date(VisitedFilter { to_date: Some("2024-01-15".into()), ..VisitedFilter::default() }, vec!["Good"])]
#[case::by_search(VisitedFilter { search: Some("ba".into()), ..VisitedFilter::default() }, vec!["Bad"])]
#[tokio::test]
async fn visited_filters(#[case] filter: VisitedFilter, #[case] expected: Vec<&str>) {
    let fx = Fixture::new();
    let good = fx.restaurant("Good", &[]).await;
    fx.visit(&good, "2024-01-10", Thumb::Up, ServiceType::Delivery).await;
    let bad = fx.restaurant("Bad", &[]).await;
    fx.visit(&bad, "2024-02-10", Thumb::Down, ServiceType::Takeaway).await;

    assert_eq!(fx.visited_names(filter, VisitedSort::Name).await, expected);
}

#[tokio::test]
async fn set_status_twice_equals_once() {
    let fx = Fixture::new();
    let id = fx.restaurant("Idempotent", &[]).await;

    let once = fx
        .restaurants
        .set_restaurant_status(&id, RestaurantStatus::Active)
        .await
        .unwrap();
    let twice = fx
        .restaurants
        .set_restaurant_status(&id, RestaurantStatus::Active)
        .await
        .unwrap();
    assert_eq!(once, twice);
}

#[tokio::test]
async fn details_list_visits_newest_first() {
    let fx = Fixture::new();
    let id = fx.restaurant("Detailed", &[]).await;
    fx.visit_with_item(&id, "2024-01-05", "Soup", Thumb::Up).await;
    fx.visit_with_item(&id, "2024-03-05", "Stew", Thumb::Down).await;
    fx.visit_with_item(&id, "2024-02-05", "Salad", Thumb::Neutral).await;

    let details = fx.restaurants.restaurant_details(&id).await.unwrap();
    let dates: Vec<_> = details.visits.iter().map(|v| v.visit.visit_date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-05", "2024-02-05", "2024-01-05"]);
    assert_eq!(details.visits[0].items[0].name, "Stew");
    assert_eq!(details.summary.visit_count, 3);
    assert_eq!(details.summary.last_visited.as_deref(), Some("2024-03-05"));
    assert_eq!(details.restaurant.status, RestaurantStatus::Active);
}

#[tokio::test]
async fn details_of_unknown_restaurant_is_not_found() {
    let fx = Fixture::new();
    let err = fx.restaurants.restaurant_details("rest_missing").await.unwrap_err();
    assert!(err.is_not_found());
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_restaurants_reports_rating_and_filters_by_thumb() {
    let fx = Fixture::new();
    let loved = fx.restaurant("Noodle King", &["chinese"]).await;
    fx.visit(&loved, "2024-01-01", Thumb::Up, ServiceType::EatIn).await;
    fx.visit(&loved, "2024-02-01", Thumb::Up, ServiceType::EatIn).await;
    fx.restaurant("Noodle Queen", &["japanese"]).await;

    let all = fx
        .search
        .search_restaurants("noodle", RestaurantSearchFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].computed_thumb, Thumb::Up);
    assert_eq!(all[0].last_visited.as_deref(), Some("2024-02-01"));
    assert_eq!(all[1].computed_thumb, Thumb::Neutral);
    assert_eq!(all[1].last_visited, None);

    let up_only = fx
        .search
        .search_restaurants(
            "noodle",
            RestaurantSearchFilter {
                thumbs: vec![Thumb::Up],
                ..RestaurantSearchFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(up_only.len(), 1);
    assert_eq!(up_only[0].restaurant.name, "Noodle King");

    let wishlist_only = fx
        .search
        .search_restaurants(
            "noodle",
            RestaurantSearchFilter {
                status: Some(RestaurantStatus::Wishlist),
                ..RestaurantSearchFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(wishlist_only.len(), 1);
    assert_eq!(wishlist_only[0].restaurant.name, "Noodle Queen");
}

#[tokio::test]
async fn search_items_drops_items_of_deleted_visit() {
    let fx = Fixture::new();
    let id = fx.restaurant("Taco Hut", &[]).await;
    let visit = fx.visit_with_item(&id, "2024-01-10", "Fish taco", Thumb::Up).await;

    let before = fx
        .search
        .search_items("taco", ItemSearchFilter::default())
        .await
        .unwrap();
    assert_eq!(before.len(), 1);

    fx.visits.delete_visit(&visit).await.unwrap();
    let after = fx
        .search
        .search_items("taco", ItemSearchFilter::default())
        .await
        .unwrap();
    assert!(after.is_empty());
}

#[tokio::test]
async fn search_items_applies_per_item_filters() {
    let fx = Fixture::new();
    let mex = fx.restaurant("Taco Hut", &["Mexican"]).await;
    let fusion = fx.restaurant("Fusion", &["korean"]).await;
    fx.visit_with_item(&mex, "2024-01-10", "Al pastor taco", Thumb::Up).await;
    fx.visit_with_item(&mex, "2024-02-10", "Fish taco", Thumb::Down).await;
    fx.visit_with_item(&fusion, "2024-03-10", "Bulgogi taco", Thumb::Up).await;

    let names = |hits: Vec<dine_app::ItemSearchHit>| -> Vec<String> {
        hits.into_iter().map(|h| h.item.name).collect()
    };

    let by_cuisine = fx
        .search
        .search_items(
            "taco",
            ItemSearchFilter {
                cuisines: vec!["mexican".into()],
                ..ItemSearchFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(names(by_cuisine), vec!["Al pastor taco", "Fish taco"]);

    let by_thumb = fx
        .search
        .search_items(
            "TACO",
            ItemSearchFilter {
                thumbs: vec![Thumb::Up],
                ..ItemSearchFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(names(by_thumb), vec!["Al pastor taco", "Bulgogi taco"]);

    let inclusive_range = fx
        .search
        .search_items(
            "taco",
            ItemSearchFilter {
                from_date: Some("2024-02-10".into()),
                to_date: Some("2024-03-10".into()),
                ..ItemSearchFilter::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(names(inclusive_range), vec!["Fish taco", "Bulgogi taco"]);

    let by_service = fx
        .search
        .search_items(
            "taco",
            ItemSearchFilter {
                service_types: vec![ServiceType::Delivery],
                ..ItemSearchFilter::default()
            },
        )
        .await
        .unwrap();
    assert!(by_service.is_empty());
}

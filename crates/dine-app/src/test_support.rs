//! Fixtures for dine-app unit tests.

use chrono::Utc;

use dine_core::entities::{Restaurant, Visit};
use dine_core::enums::{RestaurantStatus, ServiceType, Thumb};

pub fn restaurant(name: &str) -> Restaurant {
    Restaurant {
        id: format!("rest_{name}"),
        name: name.to_string(),
        status: RestaurantStatus::Active,
        cuisines: vec![],
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn visit(restaurant_name: &str, date: &str, thumb: Thumb) -> Visit {
    Visit {
        id: format!("visit_{restaurant_name}_{date}"),
        restaurant_id: format!("rest_{restaurant_name}"),
        visit_date: date.to_string(),
        service_type: ServiceType::EatIn,
        overall_thumb: thumb,
        notes: None,
        created_at: Utc::now(),
    }
}

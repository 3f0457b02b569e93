//! # dine-app
//!
//! Usecases composing the Dine repositories into the operations the
//! application exposes:
//! - [`RestaurantsUsecases`]: wishlist and visited listings with computed
//!   ratings, restaurant CRUD and the restaurant details view
//! - [`VisitsUsecases`]: visit logging with nested items and photos, and the
//!   wishlist to active promotion
//! - [`SearchUsecases`]: restaurant and item search
//!
//! Every usecase holds an `Arc<DineService>` built once at startup.

#![allow(clippy::unused_async)]

pub mod error;
pub mod filters;
pub mod restaurants;
pub mod search;
pub mod summary;
pub mod visits;

#[cfg(test)]
mod test_support;

pub use error::AppError;
pub use filters::{ItemSearchFilter, ListFilter, RestaurantSearchFilter, VisitedFilter};
pub use restaurants::{RestaurantDraft, RestaurantsUsecases};
pub use search::{ItemSearchHit, SearchUsecases};
pub use summary::{
    RestaurantDetails, RestaurantSearchHit, RestaurantSummary, VisitDetails, VisitedRestaurant,
};
pub use visits::{ItemDraft, PhotoDraft, VisitDraft, VisitsUsecases};

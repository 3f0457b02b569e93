pub mod dispatch;
pub mod item;
pub mod listing;
pub mod photo;
pub mod restaurant;
pub mod search;
pub mod shared;
pub mod visit;

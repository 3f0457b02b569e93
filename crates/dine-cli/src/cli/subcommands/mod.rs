mod item;
mod photo;
mod restaurant;
mod search;
mod visit;

pub use item::ItemCommands;
pub use photo::PhotoCommands;
pub use restaurant::RestaurantCommands;
pub use search::{ItemSearchArgs, RestaurantSearchArgs, SearchCommands};
pub use visit::{VisitCommands, VisitFields};

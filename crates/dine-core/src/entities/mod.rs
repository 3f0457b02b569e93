//! Entity structs for all Dine domain objects.
//!
//! Entities are immutable by replacement: a mutation reads the record, copies
//! it with changes and writes it back. All structs derive `Serialize`,
//! `Deserialize` and `JsonSchema` for snapshot roundtrip and schema validation.

mod restaurant;
mod visit;
mod visit_item;
mod visit_photo;

pub use restaurant::Restaurant;
pub use visit::Visit;
pub use visit_item::VisitItem;
pub use visit_photo::VisitPhoto;

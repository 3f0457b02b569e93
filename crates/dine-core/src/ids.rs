//! Id prefix constants.
//!
//! Every id has the shape `{prefix}_{suffix}`. The suffix is opaque; the
//! prefix exists only to make ids recognisable in logs and snapshots.

pub const PREFIX_RESTAURANT: &str = "rest";
pub const PREFIX_VISIT: &str = "visit";
pub const PREFIX_ITEM: &str = "item";
pub const PREFIX_PHOTO: &str = "photo";

/// Format an id from a prefix and an opaque suffix.
#[must_use]
pub fn format_id(prefix: &str, suffix: &str) -> String {
    format!("{prefix}_{suffix}")
}

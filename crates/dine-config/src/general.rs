//! General application configuration.

use dine_core::enums::VisitedSort;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Ordering used by `dine visited` when `--sort` is not given.
    #[serde(default)]
    pub default_sort: VisitedSort,
}

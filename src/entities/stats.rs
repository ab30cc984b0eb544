use serde::{Deserialize, Serialize};

/// Per-category record counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hotels: i64,
    pub restaurants: i64,
    pub total: i64,
}

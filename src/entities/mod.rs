mod category;
mod establishment;
mod feature;
mod stats;

pub use category::{Category, CategoryFilter};
pub use establishment::{Coordinates, Deleted};
pub use feature::{sort_by_distance, Feature, FeatureCollection, PointGeometry, Properties, SearchMetadata};
pub use stats::Stats;

pub mod establishments;
pub mod search;
pub mod stats;

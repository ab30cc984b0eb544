use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

/// The hotel/restaurant partition. Each category is its own table; the
/// table name interpolated into SQL comes exclusively from this enum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Hotel,
    Restaurant,
}

impl Category {
    pub fn table(self) -> &'static str {
        match self {
            Self::Hotel => "hotels",
            Self::Restaurant => "restaurants",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "hotel" | "hotels" => Ok(Self::Hotel),
            "restaurant" | "restaurants" => Ok(Self::Restaurant),
            other => Err(validation_error(format!(
                "unknown establishment category: {}",
                other
            ))),
        }
    }
}

/// Which record sets a proximity search covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    Hotels,
    Restaurants,
    Both,
}

impl CategoryFilter {
    pub fn categories(self) -> &'static [Category] {
        match self {
            Self::Hotels => &[Category::Hotel],
            Self::Restaurants => &[Category::Restaurant],
            Self::Both => &[Category::Hotel, Category::Restaurant],
        }
    }

    pub fn includes(self, category: Category) -> bool {
        self.categories().contains(&category)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::Restaurants => "restaurants",
            Self::Both => "both",
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "hotels" => Ok(Self::Hotels),
            "restaurants" => Ok(Self::Restaurants),
            "both" => Ok(Self::Both),
            other => Err(validation_error(format!(
                "unknown establishment type: {}",
                other
            ))),
        }
    }
}

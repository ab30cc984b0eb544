use crate::entities::{Category, CategoryFilter, Coordinates, Feature, FeatureCollection};

/// What a map click should do under the current add-mode toggle.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickAction {
    Create {
        category: Category,
        name: String,
        coordinates: Coordinates,
    },
    Inspect {
        coordinates: Coordinates,
    },
}

/// Client-side bookkeeping for the point layers: one per category plus
/// the user's reference point. Layers are replaced wholesale from a
/// response, never merged. Responses apply only when they belong to the
/// most recently issued request, so a slow stale response can no longer
/// clobber a newer one.
#[derive(Debug, Default)]
pub struct LayerSet {
    hotels: Vec<Feature>,
    restaurants: Vec<Feature>,
    user_location: Option<Coordinates>,
    add_mode: bool,
    pending_category: Category,
    pending_name: String,
    issued: u64,
    applied: u64,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a sequence number for a request about to go out.
    pub fn begin_request(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Replace the layers a response affects. Returns false and leaves
    /// every layer untouched when the response is stale.
    pub fn apply(
        &mut self,
        seq: u64,
        filter: CategoryFilter,
        collection: FeatureCollection,
    ) -> bool {
        if seq != self.issued || seq <= self.applied {
            return false;
        }
        self.applied = seq;

        let (hotels, restaurants): (Vec<Feature>, Vec<Feature>) = collection
            .features
            .into_iter()
            .partition(|feature| feature.properties.category == Category::Hotel);

        if filter.includes(Category::Hotel) {
            self.hotels = hotels;
        }
        if filter.includes(Category::Restaurant) {
            self.restaurants = restaurants;
        }

        true
    }

    pub fn layer(&self, category: Category) -> &[Feature] {
        match category {
            Category::Hotel => &self.hotels,
            Category::Restaurant => &self.restaurants,
        }
    }

    pub fn set_user_location(&mut self, coordinates: Coordinates) {
        self.user_location = Some(coordinates);
    }

    pub fn user_location(&self) -> Option<Coordinates> {
        self.user_location
    }

    pub fn set_add_mode(&mut self, on: bool) {
        self.add_mode = on;
    }

    pub fn add_mode(&self) -> bool {
        self.add_mode
    }

    /// Form state used when a click lands in add mode.
    pub fn set_pending<S: Into<String>>(&mut self, category: Category, name: S) {
        self.pending_category = category;
        self.pending_name = name.into();
    }

    pub fn handle_click(&self, coordinates: Coordinates) -> ClickAction {
        if self.add_mode {
            ClickAction::Create {
                category: self.pending_category,
                name: self.pending_name.clone(),
                coordinates,
            }
        } else {
            ClickAction::Inspect { coordinates }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PointGeometry;

    fn feature(id: i32, name: &str, category: Category) -> Feature {
        Feature::new(
            id,
            PointGeometry {
                kind: "Point".into(),
                coordinates: [2.17, 41.38],
            },
            name.into(),
            2.17,
            41.38,
            category,
        )
    }

    fn collection(features: Vec<Feature>) -> FeatureCollection {
        FeatureCollection::new(features)
    }

    #[test]
    fn responses_replace_affected_layers() {
        let mut layers = LayerSet::new();

        let seq = layers.begin_request();
        assert!(layers.apply(
            seq,
            CategoryFilter::Both,
            collection(vec![
                feature(1, "Hotel X", Category::Hotel),
                feature(2, "Chez Paul", Category::Restaurant),
            ]),
        ));

        assert_eq!(layers.layer(Category::Hotel).len(), 1);
        assert_eq!(layers.layer(Category::Restaurant).len(), 1);

        // a hotels-only refresh leaves the restaurant layer alone
        let seq = layers.begin_request();
        assert!(layers.apply(
            seq,
            CategoryFilter::Hotels,
            collection(vec![feature(3, "Hotel Y", Category::Hotel)]),
        ));

        assert_eq!(layers.layer(Category::Hotel)[0].id, 3);
        assert_eq!(layers.layer(Category::Restaurant).len(), 1);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut layers = LayerSet::new();

        let old_seq = layers.begin_request();
        let new_seq = layers.begin_request();

        assert!(layers.apply(
            new_seq,
            CategoryFilter::Hotels,
            collection(vec![feature(1, "Hotel X", Category::Hotel)]),
        ));

        // the older request's response arrives late and must not win
        assert!(!layers.apply(
            old_seq,
            CategoryFilter::Hotels,
            collection(vec![feature(2, "Hotel Y", Category::Hotel)]),
        ));

        assert_eq!(layers.layer(Category::Hotel)[0].id, 1);
    }

    #[test]
    fn an_applied_sequence_cannot_reapply() {
        let mut layers = LayerSet::new();

        let seq = layers.begin_request();
        assert!(layers.apply(seq, CategoryFilter::Hotels, collection(vec![])));
        assert!(!layers.apply(seq, CategoryFilter::Hotels, collection(vec![])));
    }

    #[test]
    fn clicks_dispatch_on_the_add_mode_toggle() {
        let mut layers = LayerSet::new();
        let coordinates = Coordinates {
            longitude: 2.17,
            latitude: 41.38,
        };

        assert_eq!(
            layers.handle_click(coordinates),
            ClickAction::Inspect { coordinates }
        );

        layers.set_add_mode(true);
        layers.set_pending(Category::Restaurant, "Chez Paul");

        assert_eq!(
            layers.handle_click(coordinates),
            ClickAction::Create {
                category: Category::Restaurant,
                name: "Chez Paul".into(),
                coordinates,
            }
        );
    }

    #[test]
    fn user_location_is_a_single_point() {
        let mut layers = LayerSet::new();
        assert_eq!(layers.user_location(), None);

        layers.set_user_location(Coordinates {
            longitude: 2.1682919,
            latitude: 41.3865289,
        });
        layers.set_user_location(Coordinates {
            longitude: 2.17,
            latitude: 41.38,
        });

        assert_eq!(
            layers.user_location(),
            Some(Coordinates {
                longitude: 2.17,
                latitude: 41.38,
            })
        );
    }
}

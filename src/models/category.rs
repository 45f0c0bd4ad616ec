// src/models/category.rs
// DOCUMENTATION: Nearby-search categories and grouped results
// PURPOSE: Resolve the per-request query plan and shape the grouped response

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::EnrichedPlaceResult;

/// Named bucket of upstream place-type filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Amenities,
    Connectivity,
    Shopping,
    Services,
}

impl Category {
    /// Declaration order, which is also the response order
    pub const ALL: [Category; 4] = [
        Category::Amenities,
        Category::Connectivity,
        Category::Shopping,
        Category::Services,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Amenities => "amenities",
            Category::Connectivity => "connectivity",
            Category::Shopping => "shopping",
            Category::Services => "services",
        }
    }

    /// Upstream `types` filter used when the caller supplies no override
    pub fn default_types(&self) -> &'static str {
        match self {
            Category::Amenities => "restaurant,cafe,hospital,pharmacy,atm,bank",
            Category::Connectivity => "transit_station,bus_station,subway_station,train_station",
            Category::Shopping => "shopping_mall,store,supermarket",
            Category::Services => "gas_station,parking,lodging,post_office",
        }
    }
}

/// How category filters are chosen for one request
/// DOCUMENTATION: Resolved once before dispatch. An override collapses every
/// category onto the same filter, so the upstream sees duplicate queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    PerCategory,
    Override(String),
}

impl TypeFilter {
    /// Blank overrides count as absent
    pub fn from_request(types: Option<&str>) -> Self {
        match types.map(str::trim) {
            Some(types) if !types.is_empty() => TypeFilter::Override(types.to_string()),
            _ => TypeFilter::PerCategory,
        }
    }

    pub fn resolve(&self) -> Vec<CategoryQuery> {
        Category::ALL
            .iter()
            .map(|&category| CategoryQuery {
                category,
                types: match self {
                    TypeFilter::PerCategory => category.default_types().to_string(),
                    TypeFilter::Override(types) => types.clone(),
                },
            })
            .collect()
    }
}

/// One upstream search to issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub category: Category,
    pub types: String,
}

/// Places found for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    pub category: Category,
    pub places: Vec<EnrichedPlaceResult>,
}

/// Grouped nearby results
/// DOCUMENTATION: Serializes as `{ "<category>": [places...] }` in category
/// order. Empty categories never make it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearbyPlaces {
    groups: Vec<CategoryResult>,
}

impl NearbyPlaces {
    pub fn from_results(results: impl IntoIterator<Item = CategoryResult>) -> Self {
        Self {
            groups: results
                .into_iter()
                .filter(|result| !result.places.is_empty())
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn get(&self, category: Category) -> Option<&[EnrichedPlaceResult]> {
        self.groups
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.places.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for NearbyPlaces {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(group.category.as_str(), &group.places)?;
        }
        map.end()
    }
}

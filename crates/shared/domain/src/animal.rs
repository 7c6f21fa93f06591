//! Response contract of the animal-image search API.
//!
//! One [`ImageRecord`] describes one image together with the breeds shown on it. The same shape
//! is returned for every animal the API family serves, so there is a single type for all of them.
//!
//! These types only describe the shape. Use `paw_kernel::contract` to parse untrusted payloads
//! with semantic checks.

use paw_derive::api_model;

/// An imperial/metric pair of range strings, e.g. `"90 - 120"` / `"41 - 54"`.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Measure {
    pub imperial: String,
    pub metric: String,
}

/// One breed shown on an image.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BreedInfo {
    pub weight: Measure,
    pub height: Measure,
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub bred_for: String,
    #[serde(default)]
    pub breed_group: String,
    pub life_span: String,
    /// Comma-separated descriptors, see [`BreedInfo::temperaments`].
    pub temperament: String,
    #[serde(default)]
    pub origin: String,
    pub reference_image_id: String,
}

impl BreedInfo {
    /// Iterates the trimmed, non-empty descriptors of [`BreedInfo::temperament`].
    pub fn temperaments(&self) -> impl Iterator<Item = &str> {
        self.temperament.split(',').map(str::trim).filter(|t| !t.is_empty())
    }
}

/// One image returned by the search endpoint.
#[api_model(deny_unknown_fields = false)]
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ImageRecord {
    /// Breeds in the order returned by the API; may be empty.
    #[serde(default)]
    pub breeds: Vec<BreedInfo>,
    pub id: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl ImageRecord {
    /// The first listed breed, which the API treats as the primary one.
    #[must_use]
    pub fn primary_breed(&self) -> Option<&BreedInfo> {
        self.breeds.first()
    }
}

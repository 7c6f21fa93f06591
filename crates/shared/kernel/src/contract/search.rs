use super::{ContractError, ContractErrorExt};
use paw_domain::config::DogApiConfig;
use paw_domain::constants::{API_KEY_HEADER, IMAGE_SEARCH_PATH};
use std::fmt;
use url::Url;

/// Description of an image search request: endpoint, query and auth header.
///
/// Only describes the request; executing it belongs to whatever HTTP client hosts the app.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageSearch {
    base_url: String,
    api_key: Option<String>,
    size: String,
    has_breeds: bool,
    limit: Option<u8>,
    breed_id: Option<u32>,
}

impl ImageSearch {
    #[must_use]
    pub fn from_config(config: &DogApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            size: config.size.clone(),
            has_breeds: config.has_breeds,
            limit: config.limit,
            breed_id: None,
        }
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    #[must_use]
    pub const fn has_breeds(mut self, has_breeds: bool) -> Self {
        self.has_breeds = has_breeds;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u8) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Restricts results to images of one breed.
    #[must_use]
    pub const fn breed_id(mut self, breed_id: u32) -> Self {
        self.breed_id = Some(breed_id);
        self
    }

    /// Builds the search URL, e.g. `https://api.thedogapi.com/v1/images/search?size=med&has_breeds=true`.
    ///
    /// # Errors
    /// [`ContractError::Url`] if the base URL does not parse, [`ContractError::Invalid`] if it
    /// cannot carry a path or the limit is zero.
    pub fn url(&self) -> Result<Url, ContractError> {
        let mut base = Url::parse(&self.base_url).context("api.base_url")?;
        if base.cannot_be_a_base() {
            return Err(ContractError::Invalid {
                message: format!("'{}' cannot be used as an API root", self.base_url).into(),
                context: Some("api.base_url".into()),
            });
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base.join(IMAGE_SEARCH_PATH).context("api.base_url")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("size", &self.size);
            query.append_pair("has_breeds", if self.has_breeds { "true" } else { "false" });
            if let Some(limit) = self.limit {
                if limit == 0 {
                    return Err(ContractError::Invalid {
                        message: "limit must be at least 1".into(),
                        context: Some("api.limit".into()),
                    });
                }
                query.append_pair("limit", &limit.to_string());
            }
            if let Some(breed_id) = self.breed_id {
                query.append_pair("breed_ids", &breed_id.to_string());
            }
        }

        Ok(url)
    }

    /// Headers to send with the request; empty without an API key.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, &str)> {
        self.api_key.as_deref().map(|key| (API_KEY_HEADER, key)).into_iter().collect()
    }
}

impl fmt::Debug for ImageSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageSearch")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("size", &self.size)
            .field("has_breeds", &self.has_breeds)
            .field("limit", &self.limit)
            .field("breed_id", &self.breed_id)
            .finish()
    }
}

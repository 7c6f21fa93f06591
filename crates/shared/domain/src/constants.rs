/// Route name of the calculator view.
pub const CALCULATOR_VIEW: &str = "CalculatorView";

/// Root path of the client application.
pub const ROOT_PATH: &str = "/";

/// Header carrying the API key on image search requests.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Default endpoint root of the dog image API.
pub const DOG_API_BASE_URL: &str = "https://api.thedogapi.com/v1/";

/// Image search endpoint, relative to the API root.
pub const IMAGE_SEARCH_PATH: &str = "images/search";

/// Image size requested from the search endpoint.
pub const DEFAULT_IMAGE_SIZE: &str = "med";

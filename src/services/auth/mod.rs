pub mod api_key;

pub use api_key::{API_KEY_SCHEME, ApiKeyError, ApiKeyErrorKind, get_api_key};

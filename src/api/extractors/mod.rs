pub mod api_key_ctx;

pub use api_key_ctx::{ApiKeyCtx, ApiKeyCtxExtractor};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::ApiKeyCtx;

/// Handler で、 ApiKeyCtx を受け取るための extractor
/// middleware が ApiKeyCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 401 を返す（ミドルウェア未設定）
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl<S> FromRequestParts<S> for ApiKeyCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ApiKeyCtx>()
            .cloned()
            .map(ApiKeyCtxExtractor)
            .ok_or_else(|| {
                tracing::warn!("ApiKeyCtx missing from request extensions");
                AppError::Unauthorized {
                    kind: None,
                    detail: None,
                }
            })
    }
}

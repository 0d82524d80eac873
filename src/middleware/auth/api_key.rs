//! `Authorization: ApiKey <key>` 抽出 → ApiKeyCtx を extensions に入れる
//!
//! - 抽出に失敗したら 401 (MissingHeader / MalformedHeader は error code で区別)
//! - key の照合 (store lookup) はここではしない。後段の handler/service の責務

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::extractors::ApiKeyCtx;
use crate::config::Config;
use crate::error::AppError;
use crate::services::auth::get_api_key;

/// API key が必要な範囲に middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/items", get(list_items));
/// let protected = middleware::auth::api_key::apply(protected, &config);
/// app = app.nest("/api/v1", protected);
/// ```
pub fn apply<S>(router: Router<S>, config: &Config) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(*config, api_key_middleware))
}

async fn api_key_middleware(
    State(config): State<Config>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            // header の値そのものはログに出さない
            tracing::warn!(
                kind = ?err.kind(),
                method = %req.method(),
                path = %req.uri().path(),
                "api key extraction failed"
            );
            return Err(AppError::unauthorized(err, config.expose_error_detail()));
        }
    };

    tracing::debug!(path = %req.uri().path(), "api key extracted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ApiKeyCtx::new(key));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{StatusCode, header},
        routing::get,
    };
    use tower::ServiceExt;

    use crate::api::extractors::ApiKeyCtxExtractor;
    use crate::config::AppEnv;

    async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> String {
        ctx.key
    }

    fn test_app(app_env: AppEnv) -> Router {
        let protected = Router::new().route("/whoami", get(whoami));
        let protected = apply(protected, &Config::new(app_env));

        Router::new()
            .route("/health", get(|| async { "ok" }))
            .merge(protected)
    }

    fn request(path: &str, auth: &[&str]) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        for value in auth {
            builder = builder.header(header::AUTHORIZATION, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn passes_key_to_handler() {
        let resp = test_app(AppEnv::Development)
            .oneshot(request("/whoami", &["ApiKey test-api-key"]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"test-api-key");
    }

    #[tokio::test]
    async fn first_of_repeated_headers_wins() {
        let resp = test_app(AppEnv::Development)
            .oneshot(request(
                "/whoami",
                &["ApiKey test-api-key-1", "ApiKey test-api-key-2"],
            ))
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"test-api-key-1");
    }

    #[tokio::test]
    async fn missing_header_is_401() {
        crate::telemetry::init_tracing();

        let resp = test_app(AppEnv::Development)
            .oneshot(request("/whoami", &[]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "ApiKey"
        );
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");
    }

    #[tokio::test]
    async fn wrong_scheme_is_401_with_detail_in_development() {
        let resp = test_app(AppEnv::Development)
            .oneshot(request("/whoami", &["Bearer test-api-key"]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "MALFORMED_AUTHORIZATION");
        assert_eq!(
            body["error"]["message"],
            "malformed authorization header: unsupported scheme"
        );
    }

    #[tokio::test]
    async fn production_hides_detail() {
        let resp = test_app(AppEnv::Production)
            .oneshot(request("/whoami", &["ApiKey"]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["error"]["code"], "MALFORMED_AUTHORIZATION");
        assert_eq!(body["error"]["message"], "unauthorized");
    }

    #[tokio::test]
    async fn unprotected_routes_are_untouched() {
        let resp = test_app(AppEnv::Production)
            .oneshot(request("/health", &[]))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }
}

/*
 * Responsibility
 * - `Authorization: ApiKey <key>` ヘッダからの API key 抽出 (core)
 * - axum 向けの middleware / extractor (adapter)
 * - 設定・エラー・ログなどの共通部品
 *
 * Notes
 * - key の検証 (store 照合) や発行はこの crate の責務外
 */
pub mod api;
pub mod config;
pub mod error;
pub mod headers;
pub mod middleware;
pub mod services;
pub mod telemetry;

pub use headers::{HeaderCollection, HeaderSource};
pub use services::auth::api_key::{ApiKeyError, ApiKeyErrorKind, get_api_key};

/*!
 * API key context extractor
 *
 * Responsibility:
 * - middleware が抽出した API key（ApiKeyCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApiKeyCtx
 * - ApiKeyCtxExtractor
 */

mod core;
mod types;

pub use self::core::ApiKeyCtxExtractor;
pub use types::ApiKeyCtx;

/*
 * Responsibility
 * - handler 側から使う axum 依存の部品 (extractor など)
 */
pub mod extractors;

/*
 * Responsibility
 * - HTTP/axum に依存しないロジック (core) を置く
 */
pub mod auth;

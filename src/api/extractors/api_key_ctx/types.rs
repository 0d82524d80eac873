/*
 * Responsibility
 * - Handler から見える「抽出済み API key」の型
 * - middleware が抽出して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key が正しいかどうか (store 照合) はこの型の責務外。あくまで抽出結果
 */
use std::fmt;

/// API key taken from `Authorization: ApiKey <key>`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    pub key: String,
}

impl ApiKeyCtx {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

// ログに key を出さない
impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("key", &"<redacted>")
            .finish()
    }
}

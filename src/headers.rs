/*
 * Responsibility
 * - ヘッダ集合の抽象 (HeaderSource)
 *   - 名前は case-insensitive、値は出現順の multi-value
 * - axum::http::HeaderMap と、テストや非 HTTP 経路で使う HeaderCollection に実装する
 */
use std::collections::BTreeMap;

use axum::http::HeaderMap;

/// A read-only view over request headers.
pub trait HeaderSource {
    /// Raw bytes of the first value stored under `name` (case-insensitive).
    ///
    /// `None` when the header is absent or its value list is empty.
    fn first_value(&self, name: &str) -> Option<&[u8]>;
}

impl HeaderSource for HeaderMap {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        // HeaderMap::get returns the first of repeated values
        self.get(name).map(|v| v.as_bytes())
    }
}

/// Owned multi-value header map keyed by the lowercased header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    entries: BTreeMap<String, Vec<String>>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` after any values already stored under `name`.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.entries
            .entry(canonical(name))
            .or_default()
            .push(value.into());
    }

    /// Replace the value list under `name`. An empty list keeps the name present.
    pub fn insert(&mut self, name: &str, values: Vec<String>) {
        self.entries.insert(canonical(name), values);
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&canonical(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&canonical(name))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderSource for HeaderCollection {
    fn first_value(&self, name: &str) -> Option<&[u8]> {
        self.first(name).map(str::as_bytes)
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderCollection
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.append(name.as_ref(), value);
        }
        headers
    }
}

fn canonical(name: &str) -> String {
    name.to_ascii_lowercase()
}

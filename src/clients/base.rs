use serde_json::Value;

use crate::models::SelectQuery;

/// A backend that can answer a [`SelectQuery`].
///
/// Implementations issue exactly one request per call and do not retry.
pub trait TableClient {
    fn select(&self, query: &SelectQuery) -> impl Future<Output = anyhow::Result<Value>>;
}

use async_trait::async_trait;

use crate::types::RawArticle;
use crate::Result;

/// The single inbound seam: a source of raw provider articles for a free-text
/// query. Implemented over HTTP in `tf_provider` and stubbed in tests.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Query the provider, newest first. Errors bubble up to the caller,
    /// which converts them to a fallback value rather than surfacing them.
    async fn search(&self, query: &str, page_size: usize) -> Result<Vec<RawArticle>>;
}

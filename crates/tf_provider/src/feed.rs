use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{info, warn};

use tf_core::{Article, Lexicon, NewsProvider};

use tf_engine::normalize_feed;

use crate::sample::sample_articles;

/// Search terms cycled for feed refreshes; one is chosen per refresh.
pub const FEED_QUERIES: [&str; 8] = [
    "stock market trading",
    "cryptocurrency bitcoin",
    "tech stocks FAANG",
    "nasdaq dow jones",
    "federal reserve interest rates",
    "economy inflation",
    "trading investment",
    "financial markets",
];

const FEED_PAGE_SIZE: usize = 20;

/// Chooses which feed query a refresh runs. Pluggable so tests can pin it.
pub trait QueryPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

pub struct RandomQueryPicker;

impl QueryPicker for RandomQueryPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Refreshes the article collection: one provider request, normalized and
/// capped, degrading to the built-in samples on any failure or empty result.
/// Never errors and never retries.
pub struct FeedFetcher {
    provider: Arc<dyn NewsProvider>,
    lexicon: Lexicon,
    picker: Box<dyn QueryPicker>,
}

impl FeedFetcher {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self {
            provider,
            lexicon: Lexicon::default(),
            picker: Box::new(RandomQueryPicker),
        }
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_picker(mut self, picker: Box<dyn QueryPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub async fn refresh(&self) -> Vec<Article> {
        let query = FEED_QUERIES[self.picker.pick(FEED_QUERIES.len())];
        let now = Utc::now();

        match self.provider.search(query, FEED_PAGE_SIZE).await {
            Ok(raw) => {
                let articles = normalize_feed(&raw, now, &self.lexicon);
                if articles.is_empty() {
                    warn!(query, "no usable articles in provider response, serving samples");
                    sample_articles(now)
                } else {
                    info!(query, articles = articles.len(), "feed refreshed");
                    articles
                }
            }
            Err(error) => {
                warn!(%error, query, "feed refresh failed, serving samples");
                sample_articles(now)
            }
        }
    }
}

pub mod client;
pub mod feed;
pub mod sample;

pub use client::NewsApiClient;
pub use feed::{FeedFetcher, QueryPicker, RandomQueryPicker, FEED_QUERIES};
pub use sample::sample_articles;

pub mod prelude {
    pub use super::{FeedFetcher, NewsApiClient};
    pub use tf_core::{Article, Error, NewsProvider, Result};
}

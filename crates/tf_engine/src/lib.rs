pub mod classify;
pub mod keypoints;
pub mod normalize;
pub mod rank;
pub mod respond;
pub mod timefmt;
pub mod trending;

pub use classify::{categorize, score_sentiment};
pub use keypoints::extract_key_points;
pub use normalize::{normalize_feed, normalize_search, FEED_LIMIT};
pub use rank::{rank_by_relevance, rank_with_scores};
pub use respond::{greeting, FallbackPicker, RandomPicker, Responder};
pub use timefmt::time_ago;
pub use trending::compute_trending;

pub mod prelude {
    pub use super::respond::Responder;
    pub use tf_core::{Article, Category, ChatMessage, Lexicon, Result, Sentiment};
}

pub mod error;
pub mod lexicon;
pub mod provider;
pub mod types;

pub use error::Error;
pub use lexicon::Lexicon;
pub use provider::NewsProvider;
pub use types::{
    Article, Category, ChatMessage, Comment, MarketQuote, MarketSnapshot, RawArticle, RawSource,
    Sender, Sentiment, TrendingTopic,
};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::{
        Article, Category, ChatMessage, Error, Lexicon, NewsProvider, Result, Sentiment,
    };
}

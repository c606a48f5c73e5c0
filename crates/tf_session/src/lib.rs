pub mod market;
pub mod state;

pub use market::tick_market;
pub use state::{Session, SessionState, SessionStats};

pub mod prelude {
    pub use super::{Session, SessionStats};
    pub use tf_core::{Article, Category, ChatMessage, Comment, MarketSnapshot, TrendingTopic};
}

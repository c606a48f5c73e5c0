use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use tf_core::{
    Article, Category, ChatMessage, Comment, Error, MarketSnapshot, Result, TrendingTopic,
};

use tf_engine::{compute_trending, greeting};

use crate::market::tick_market;

/// Counters surfaced by the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub articles: usize,
    pub bookmarks: usize,
    pub read: usize,
}

/// Everything a running session owns. All of it is ephemeral; nothing
/// survives process exit. The engine operates on values passed in and out of
/// here and keeps no copy of its own.
pub struct SessionState {
    articles: Vec<Article>,
    trending: Vec<TrendingTopic>,
    bookmarks: Vec<String>,
    read_history: Vec<String>,
    comments: HashMap<String, Vec<Comment>>,
    chat: Vec<ChatMessage>,
    market: MarketSnapshot,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            trending: Vec::new(),
            bookmarks: Vec::new(),
            read_history: Vec::new(),
            comments: HashMap::new(),
            chat: vec![greeting()],
            market: MarketSnapshot::default(),
        }
    }

    /// Wholesale replacement: article ids restart from "1" on every refresh,
    /// so bookmark/read/comment keys refer to whichever batch is current.
    /// Overlapping refreshes are not sequenced; the later write wins.
    pub fn replace_articles(&mut self, articles: Vec<Article>) {
        self.trending = compute_trending(&articles);
        debug!(articles = articles.len(), trending = self.trending.len(), "feed replaced");
        self.articles = articles;
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Feed filter: category equality plus plain substring containment on
    /// title/summary. No scoring and no ranking, unlike the chat path.
    pub fn filtered_articles(&self, category: Option<Category>, search: Option<&str>) -> Vec<Article> {
        self.articles
            .iter()
            .filter(|article| category.map_or(true, |c| article.category == c))
            .filter(|article| {
                search.map_or(true, |needle| {
                    let needle = needle.to_lowercase();
                    article.title.to_lowercase().contains(&needle)
                        || article.summary.to_lowercase().contains(&needle)
                })
            })
            .cloned()
            .collect()
    }

    pub fn trending(&self) -> &[TrendingTopic] {
        &self.trending
    }

    /// Returns whether the article is bookmarked after the toggle.
    pub fn toggle_bookmark(&mut self, article_id: &str) -> bool {
        if let Some(position) = self.bookmarks.iter().position(|id| id == article_id) {
            self.bookmarks.remove(position);
            false
        } else {
            self.bookmarks.push(article_id.to_string());
            true
        }
    }

    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn mark_read(&mut self, article_id: &str) {
        if !self.read_history.iter().any(|id| id == article_id) {
            self.read_history.push(article_id.to_string());
        }
    }

    pub fn read_history(&self) -> &[String] {
        &self.read_history
    }

    pub fn add_comment(&mut self, article_id: &str, user: &str, text: &str) -> Result<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Session("comment text is empty".to_string()));
        }
        let comment = Comment::new(user, text);
        self.comments
            .entry(article_id.to_string())
            .or_default()
            .push(comment.clone());
        Ok(comment)
    }

    /// Returns the new like count, or `None` when the comment is unknown.
    pub fn like_comment(&mut self, article_id: &str, comment_id: &str) -> Option<u32> {
        let comment = self
            .comments
            .get_mut(article_id)?
            .iter_mut()
            .find(|c| c.id == comment_id)?;
        comment.likes += 1;
        Some(comment.likes)
    }

    pub fn comments(&self, article_id: &str) -> Vec<Comment> {
        self.comments.get(article_id).cloned().unwrap_or_default()
    }

    pub fn push_chat(&mut self, message: ChatMessage) {
        self.chat.push(message);
    }

    pub fn chat(&self) -> &[ChatMessage] {
        &self.chat
    }

    pub fn market(&self) -> MarketSnapshot {
        self.market
    }

    pub fn tick_market(&mut self, rng: &mut impl Rng) {
        tick_market(&mut self.market, rng);
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            articles: self.articles.len(),
            bookmarks: self.bookmarks.len(),
            read: self.read_history.len(),
        }
    }

    pub fn clear_read_history(&mut self) {
        self.read_history.clear();
    }

    pub fn clear_bookmarks(&mut self) {
        self.bookmarks.clear();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle over the session state. Cheap to clone; one lock guards the
/// whole state, and each operation takes it exactly once.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::new())),
        }
    }

    pub async fn replace_articles(&self, articles: Vec<Article>) {
        self.state.write().await.replace_articles(articles);
    }

    pub async fn articles(&self) -> Vec<Article> {
        self.state.read().await.articles().to_vec()
    }

    pub async fn filtered_articles(
        &self,
        category: Option<Category>,
        search: Option<&str>,
    ) -> Vec<Article> {
        self.state.read().await.filtered_articles(category, search)
    }

    pub async fn trending(&self) -> Vec<TrendingTopic> {
        self.state.read().await.trending().to_vec()
    }

    pub async fn toggle_bookmark(&self, article_id: &str) -> bool {
        self.state.write().await.toggle_bookmark(article_id)
    }

    pub async fn bookmarks(&self) -> Vec<String> {
        self.state.read().await.bookmarks().to_vec()
    }

    pub async fn mark_read(&self, article_id: &str) {
        self.state.write().await.mark_read(article_id);
    }

    pub async fn read_history(&self) -> Vec<String> {
        self.state.read().await.read_history().to_vec()
    }

    pub async fn add_comment(&self, article_id: &str, user: &str, text: &str) -> Result<Comment> {
        self.state.write().await.add_comment(article_id, user, text)
    }

    pub async fn like_comment(&self, article_id: &str, comment_id: &str) -> Option<u32> {
        self.state.write().await.like_comment(article_id, comment_id)
    }

    pub async fn comments(&self, article_id: &str) -> Vec<Comment> {
        self.state.read().await.comments(article_id)
    }

    pub async fn push_chat(&self, message: ChatMessage) {
        self.state.write().await.push_chat(message);
    }

    pub async fn chat(&self) -> Vec<ChatMessage> {
        self.state.read().await.chat().to_vec()
    }

    pub async fn market(&self) -> MarketSnapshot {
        self.state.read().await.market()
    }

    pub async fn tick_market(&self, rng: &mut (impl Rng + Send)) {
        self.state.write().await.tick_market(rng);
    }

    pub async fn stats(&self) -> SessionStats {
        self.state.read().await.stats()
    }

    pub async fn clear_read_history(&self) {
        self.state.write().await.clear_read_history();
    }

    pub async fn clear_bookmarks(&self) {
        self.state.write().await.clear_bookmarks();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feed category assigned at normalization time. `Business` is the fallback
/// when no category keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Stocks,
    Crypto,
    Tech,
    Markets,
    Business,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Stocks => "Stocks",
            Category::Crypto => "Crypto",
            Category::Tech => "Tech",
            Category::Markets => "Markets",
            Category::Business => "Business",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stocks" => Ok(Category::Stocks),
            "crypto" => Ok(Category::Crypto),
            "tech" => Ok(Category::Tech),
            "markets" => Ok(Category::Markets),
            "business" => Ok(Category::Business),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Glyph form used in chat replies and feed badges.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "↗ Bullish",
            Sentiment::Negative => "↘ Bearish",
            Sentiment::Neutral => "→ Neutral",
        }
    }
}

/// Normalized news record. Immutable once created; a feed refresh replaces
/// the whole collection rather than mutating entries. Category and sentiment
/// are derived from title+description once, at normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub source: String,
    /// Relative-time label ("N hours ago") frozen at normalization.
    pub time: String,
    pub published_at: DateTime<Utc>,
    pub image_url: String,
    pub category: Category,
    pub sentiment: Sentiment,
    pub summary: String,
    pub key_points: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub keyword: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the append-only chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant)
    }

    fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub text: String,
    pub time: String,
    pub likes: u32,
}

impl Comment {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user: user.into(),
            text: text.into(),
            time: "Just now".to_string(),
            likes: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub price: f64,
    pub change: f64,
}

/// Snapshot of the simulated ticker for SPY, BTC and ETH.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub spy: MarketQuote,
    pub btc: MarketQuote,
    pub eth: MarketQuote,
}

impl Default for MarketSnapshot {
    fn default() -> Self {
        Self {
            spy: MarketQuote { price: 445.23, change: 1.2 },
            btc: MarketQuote { price: 48234.0, change: 2.8 },
            eth: MarketQuote { price: 2543.0, change: -0.5 },
        }
    }
}

/// One item of the provider's `everything` payload. Every field may be
/// missing; the normalizer decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source: Option<RawSource>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub name: Option<String>,
}

use crate::types::Category;

/// Keyword tables driving categorization and sentiment scoring. The tables
/// are data, not code, so classification policy can be swapped or extended
/// without touching the engine.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Category groups in priority order: the first group with a matching
    /// keyword wins. `Category::Business` is the fallback and carries no
    /// keywords.
    pub categories: Vec<(Category, Vec<&'static str>)>,
    pub positive: Vec<&'static str>,
    pub negative: Vec<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            categories: vec![
                (Category::Stocks, vec!["stock", "trading", "shares"]),
                (Category::Crypto, vec!["bitcoin", "crypto", "ethereum"]),
                (Category::Tech, vec!["tech", "software", "ai", "apple", "google"]),
                (Category::Markets, vec!["market", "dow", "nasdaq", "s&p"]),
            ],
            positive: vec![
                "surge", "gain", "rally", "rise", "jump", "soar", "boost", "up", "high",
                "record", "profit", "growth", "success",
            ],
            negative: vec![
                "fall", "drop", "crash", "decline", "loss", "down", "plunge", "sink",
                "slump", "weak",
            ],
        }
    }
}

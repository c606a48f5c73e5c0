use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, warn};

use tf_core::{Article, ChatMessage, Lexicon, NewsProvider, Sentiment};

use crate::normalize::normalize_search;
use crate::rank::rank_by_relevance;

const SEARCH_PAGE_SIZE: usize = 10;
const SUMMARY_CLIP: usize = 150;

/// Canned replies used when no relevant article can be found locally or
/// remotely. `{query}` is replaced with the user's raw input.
pub const FALLBACK_TEMPLATES: [&str; 3] = [
    "🤔 I couldn't find specific news about \"{query}\" in my current data.\n\nTry these related topics:\n• Stock market trends\n• Cryptocurrency updates\n• Tech company earnings\n• Economic indicators\n\nOr check the news feed for the latest market updates!",
    "📭 No recent news found specifically about \"{query}\".\n\nThe market moves fast! Try:\n• Searching for broader terms\n• Checking different categories\n• Looking at major market indices\n• Reviewing economic calendar events",
    "🔍 I don't have fresh news about \"{query}\" right now.\n\n💡 Popular topics I can help with:\n• Bitcoin and cryptocurrency\n• Stock market performance\n• Federal Reserve updates\n• Tech sector news\n• Trading strategies\n\nTry the search feature in the news feed!",
];

/// Chooses which canned template answers a missed query. Pluggable so tests
/// can pin the choice.
pub trait FallbackPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

pub struct RandomPicker;

impl FallbackPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// The assistant's opening message for a fresh transcript.
pub fn greeting() -> ChatMessage {
    ChatMessage::assistant(
        "Hi! I'm your AI Trading Assistant 🤖\n\nI can help you with:\n• Market trend analysis\n• News summaries\n• Investment insights\n• Stock/Crypto updates\n\nWhat would you like to know?",
    )
}

/// Answers free-text questions against a news corpus. Resolution order:
/// local ranked match, then a live provider search over freshly normalized
/// results, then a canned fallback. Always produces a chat message; provider
/// failures are logged and absorbed, never returned to the caller.
pub struct Responder {
    provider: Arc<dyn NewsProvider>,
    lexicon: Lexicon,
    picker: Box<dyn FallbackPicker>,
}

impl Responder {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self {
            provider,
            lexicon: Lexicon::default(),
            picker: Box::new(RandomPicker),
        }
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_picker(mut self, picker: Box<dyn FallbackPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub async fn respond(&self, query: &str, articles: &[Article]) -> ChatMessage {
        let ranked = rank_by_relevance(query, articles);
        if !ranked.is_empty() {
            debug!(query, matches = ranked.len(), "answering from local corpus");
            return ChatMessage::assistant(compose_answer(query, &ranked));
        }

        debug!(query, "no local match, querying provider");
        let fresh = match self.provider.search(query, SEARCH_PAGE_SIZE).await {
            Ok(raw) => normalize_search(&raw, Utc::now(), &self.lexicon),
            Err(error) => {
                warn!(%error, query, "provider search failed");
                Vec::new()
            }
        };

        let ranked = rank_by_relevance(query, &fresh);
        if !ranked.is_empty() {
            debug!(query, matches = ranked.len(), "answering from fresh fetch");
            return ChatMessage::assistant(compose_answer(query, &ranked));
        }

        self.fallback(query)
    }

    fn fallback(&self, query: &str) -> ChatMessage {
        let index = self.picker.pick(FALLBACK_TEMPLATES.len());
        ChatMessage::assistant(FALLBACK_TEMPLATES[index].replace("{query}", query))
    }
}

/// Aggregate verdict over the ranked articles: a strict majority over both
/// other polarities is required for a directional call.
pub fn overall_sentiment(articles: &[Article]) -> &'static str {
    let positive = articles.iter().filter(|a| a.sentiment == Sentiment::Positive).count();
    let negative = articles.iter().filter(|a| a.sentiment == Sentiment::Negative).count();
    let neutral = articles.iter().filter(|a| a.sentiment == Sentiment::Neutral).count();

    if positive > negative && positive > neutral {
        "↗ Mostly Positive"
    } else if negative > positive && negative > neutral {
        "↘ Mostly Negative"
    } else {
        "→ Mixed/Neutral"
    }
}

fn compose_answer(query: &str, ranked: &[Article]) -> String {
    let mut text = format!("📊 Based on current news about \"{}\":\n\n", query);

    for article in ranked {
        text.push_str(&format!("📰 **{}**\n", article.title));
        text.push_str(&format!("🏷️ Category: {}\n", article.category));
        text.push_str(&format!("📈 Sentiment: {}\n", article.sentiment.label()));
        text.push_str(&format!("📝 {}\n", clip_summary(&article.summary)));
        text.push_str(&format!("🕐 {}\n\n", article.time));
    }

    text.push_str("💡 **Key Insights:**\n");
    text.push_str(&format!("• Market sentiment: {}\n", overall_sentiment(ranked)));

    let sectors = distinct_categories(ranked);
    text.push_str(&format!("• Trending sectors: {}\n", sectors.join(", ")));

    let positive_sectors: Vec<String> = ranked
        .iter()
        .filter(|a| a.sentiment == Sentiment::Positive)
        .map(|a| a.category.to_string())
        .collect();
    if !positive_sectors.is_empty() {
        text.push_str(&format!("• Positive developments in {}\n", positive_sectors.join(", ")));
    }

    text.push_str("\n🔍 Check the news feed for detailed analysis!");
    text
}

fn clip_summary(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_CLIP {
        let clipped: String = summary.chars().take(SUMMARY_CLIP).collect();
        format!("{}...", clipped)
    } else {
        summary.to_string()
    }
}

fn distinct_categories(articles: &[Article]) -> Vec<String> {
    let mut seen = Vec::new();
    for article in articles {
        let name = article.category.to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

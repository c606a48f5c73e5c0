use chrono::{DateTime, Utc};

use tf_core::{Article, Lexicon, RawArticle};

use crate::classify::{categorize, score_sentiment};
use crate::keypoints::extract_key_points;
use crate::timefmt::time_ago;

/// A feed refresh keeps at most this many articles after filtering.
pub const FEED_LIMIT: usize = 15;

const SUMMARY_PLACEHOLDER: &str = "No summary available.";

/// Normalize a feed batch: drop incomplete records, synthesize positional
/// ids ("1", "2", ...), keep provider order, truncate to `FEED_LIMIT`.
pub fn normalize_feed(raw: &[RawArticle], now: DateTime<Utc>, lexicon: &Lexicon) -> Vec<Article> {
    normalize_batch(raw, now, lexicon, |index| (index + 1).to_string())
        .into_iter()
        .take(FEED_LIMIT)
        .collect()
}

/// Normalize a chat-search batch: same filtering, "search-N" ids, no cap.
pub fn normalize_search(raw: &[RawArticle], now: DateTime<Utc>, lexicon: &Lexicon) -> Vec<Article> {
    normalize_batch(raw, now, lexicon, |index| format!("search-{}", index + 1))
}

fn normalize_batch(
    raw: &[RawArticle],
    now: DateTime<Utc>,
    lexicon: &Lexicon,
    make_id: impl Fn(usize) -> String,
) -> Vec<Article> {
    raw.iter()
        .filter(|item| has_required_fields(item))
        .enumerate()
        .map(|(index, item)| normalize_article(item, make_id(index), now, lexicon))
        .collect()
}

/// Both title and image are required by the reading surface; records missing
/// either are dropped silently, not reported as errors.
fn has_required_fields(raw: &RawArticle) -> bool {
    non_empty(raw.title.as_deref()).is_some() && non_empty(raw.url_to_image.as_deref()).is_some()
}

fn normalize_article(
    raw: &RawArticle,
    id: String,
    now: DateTime<Utc>,
    lexicon: &Lexicon,
) -> Article {
    let title = raw.title.clone().unwrap_or_default();
    let description = non_empty(raw.description.as_deref());
    let body = description.or_else(|| non_empty(raw.content.as_deref()));

    let classified_text = format!("{} {}", title, description.unwrap_or(""));
    let published_at = raw.published_at.unwrap_or(now);

    Article {
        id,
        title,
        source: raw
            .source
            .as_ref()
            .and_then(|s| s.name.clone())
            .unwrap_or_default(),
        time: time_ago(published_at, now),
        published_at,
        image_url: raw.url_to_image.clone().unwrap_or_default(),
        category: categorize(&classified_text, lexicon),
        sentiment: score_sentiment(&classified_text, lexicon),
        summary: body.unwrap_or(SUMMARY_PLACEHOLDER).to_string(),
        key_points: extract_key_points(body.unwrap_or("")),
        url: raw.url.clone().unwrap_or_default(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tf_core::{Category, RawSource, Sentiment};

    fn now() -> DateTime<Utc> {
        "2024-03-01T12:00:00Z".parse().unwrap()
    }

    fn raw(title: Option<&str>, image: Option<&str>) -> RawArticle {
        RawArticle {
            title: title.map(String::from),
            description: Some("Stocks surge on record profit across the board today.".to_string()),
            content: None,
            url_to_image: image.map(String::from),
            published_at: Some("2024-03-01T10:00:00Z".parse().unwrap()),
            source: Some(RawSource { name: Some("Wire".to_string()) }),
            url: Some("https://example.com/a".to_string()),
        }
    }

    #[test]
    fn test_drops_records_missing_title_or_image() {
        let batch = vec![
            raw(None, Some("https://img/1")),
            raw(Some("Kept"), None),
            raw(Some(""), Some("https://img/3")),
            raw(Some("Survivor"), Some("https://img/4")),
        ];
        let articles = normalize_feed(&batch, now(), &Lexicon::default());
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Survivor");
        // Ids follow position in the filtered batch, not the raw one.
        assert_eq!(articles[0].id, "1");
    }

    #[test]
    fn test_feed_truncates_to_limit() {
        let batch: Vec<RawArticle> =
            (0..20).map(|_| raw(Some("T"), Some("https://img"))).collect();
        let articles = normalize_feed(&batch, now(), &Lexicon::default());
        assert_eq!(articles.len(), FEED_LIMIT);
        assert_eq!(articles.last().unwrap().id, "15");
    }

    #[test]
    fn test_search_ids_and_no_cap() {
        let batch: Vec<RawArticle> =
            (0..20).map(|_| raw(Some("T"), Some("https://img"))).collect();
        let articles = normalize_search(&batch, now(), &Lexicon::default());
        assert_eq!(articles.len(), 20);
        assert_eq!(articles[0].id, "search-1");
        assert_eq!(articles[19].id, "search-20");
    }

    #[test]
    fn test_summary_fallback_chain() {
        let mut item = raw(Some("T"), Some("https://img"));
        item.description = None;
        item.content = Some("Content body instead.".to_string());
        let articles = normalize_feed(&[item.clone()], now(), &Lexicon::default());
        assert_eq!(articles[0].summary, "Content body instead.");

        item.content = None;
        let articles = normalize_feed(&[item.clone()], now(), &Lexicon::default());
        assert_eq!(articles[0].summary, "No summary available.");

        // Empty description falls through to content, like a missing one.
        item.description = Some(String::new());
        item.content = Some("Still the content.".to_string());
        let articles = normalize_feed(&[item], now(), &Lexicon::default());
        assert_eq!(articles[0].summary, "Still the content.");
    }

    #[test]
    fn test_derives_category_sentiment_and_time() {
        let articles = normalize_feed(&[raw(Some("Big day"), Some("https://img"))], now(), &Lexicon::default());
        let article = &articles[0];
        assert_eq!(article.category, Category::Stocks);
        assert_eq!(article.sentiment, Sentiment::Positive);
        assert_eq!(article.time, "2 hours ago");
        assert_eq!(article.source, "Wire");
        assert!(!article.key_points.is_empty());
    }

    #[test]
    fn test_missing_published_at_uses_now() {
        let mut item = raw(Some("T"), Some("https://img"));
        item.published_at = None;
        let articles = normalize_feed(&[item], now(), &Lexicon::default());
        assert_eq!(articles[0].published_at, now());
        assert_eq!(articles[0].time, "0 minutes ago");
    }
}

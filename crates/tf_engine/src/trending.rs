use std::collections::HashMap;

use tf_core::{Article, TrendingTopic};

const TOP_TOPICS: usize = 8;
const MIN_TOKEN_LEN: usize = 4;

/// Word-frequency ranking over the whole collection. Tokens come from
/// `title + " " + summary`, lowercased, whitespace-split, length > 4.
/// Repeats within one article count every time. Recomputed from scratch on
/// every call; ties keep first-occurrence order, which is incidental and
/// not part of the contract.
pub fn compute_trending(articles: &[Article]) -> Vec<TrendingTopic> {
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for article in articles {
        let text = format!("{} {}", article.title, article.summary).to_lowercase();
        for token in text.split_whitespace() {
            if token.chars().count() <= MIN_TOKEN_LEN {
                continue;
            }
            match first_seen.get(token) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    first_seen.insert(token.to_string(), counts.len());
                    counts.push((token.to_string(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_TOPICS)
        .map(|(keyword, count)| TrendingTopic { keyword, count })
        .collect()
}

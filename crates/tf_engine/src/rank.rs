use tf_core::Article;

const MAX_RESULTS: usize = 3;
const MIN_QUERY_TOKEN_LEN: usize = 2;

/// Score candidates against a free-text query and keep the best three.
/// Scoring is keyword overlap: how many distinct query tokens (length > 2)
/// occur as substrings of the lowercased `title + " " + summary`. Zero-score
/// candidates are dropped; the sort is stable, so ties keep their original
/// relative order.
pub fn rank_with_scores(query: &str, articles: &[Article]) -> Vec<(Article, usize)> {
    let tokens = query_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(Article, usize)> = articles
        .iter()
        .filter_map(|article| {
            let text = format!("{} {}", article.title, article.summary).to_lowercase();
            let score = tokens.iter().filter(|token| text.contains(token.as_str())).count();
            (score > 0).then(|| (article.clone(), score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_RESULTS);
    scored
}

pub fn rank_by_relevance(query: &str, articles: &[Article]) -> Vec<Article> {
    rank_with_scores(query, articles)
        .into_iter()
        .map(|(article, _)| article)
        .collect()
}

fn query_tokens(query: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in query.to_lowercase().split_whitespace() {
        if token.chars().count() > MIN_QUERY_TOKEN_LEN && !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tf_core::{Category, Sentiment};

    fn article(id: &str, title: &str, summary: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            source: "test".to_string(),
            time: "1 hours ago".to_string(),
            published_at: Utc::now(),
            image_url: String::new(),
            category: Category::Business,
            sentiment: Sentiment::Neutral,
            summary: summary.to_string(),
            key_points: vec![],
            url: String::new(),
        }
    }

    #[test]
    fn test_zero_score_articles_dropped() {
        let articles = vec![article("1", "Cooking tips", "Pasta for dinner")];
        assert!(rank_by_relevance("bitcoin rally", &articles).is_empty());
    }

    #[test]
    fn test_short_tokens_ignored() {
        let articles = vec![article("1", "Up and at it", "on it")];
        // Every query token has length <= 2.
        assert!(rank_by_relevance("up at on", &articles).is_empty());
    }

    #[test]
    fn test_sorted_by_descending_score_capped_at_three() {
        let articles = vec![
            article("1", "bitcoin", "nothing else"),
            article("2", "bitcoin rally", "price action"),
            article("3", "bitcoin rally price", "all three"),
            article("4", "bitcoin price", "two hits"),
        ];
        let ranked = rank_with_scores("bitcoin rally price", &articles);
        assert_eq!(ranked.len(), 3);
        let scores: Vec<usize> = ranked.iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, vec![3, 2, 2]);
        assert!(ranked.iter().all(|(_, s)| *s > 0));
        assert_eq!(ranked[0].0.id, "3");
        // Tie between "2" and "4" keeps original order.
        assert_eq!(ranked[1].0.id, "2");
        assert_eq!(ranked[2].0.id, "4");
    }

    #[test]
    fn test_duplicate_query_tokens_count_once() {
        let articles = vec![
            article("1", "bitcoin news", ""),
            article("2", "bitcoin rally today", ""),
        ];
        let ranked = rank_with_scores("bitcoin bitcoin bitcoin rally", &articles);
        // "1" scores 1, "2" scores 2 despite the repeated token.
        assert_eq!(ranked[0].0.id, "2");
        assert_eq!(ranked[0].1, 2);
        assert_eq!(ranked[1].1, 1);
    }

    #[test]
    fn test_substring_containment() {
        let articles = vec![article("1", "Bitcoins everywhere", "")];
        // "bitcoin" matches inside "bitcoins".
        assert_eq!(rank_by_relevance("bitcoin", &articles).len(), 1);
    }
}

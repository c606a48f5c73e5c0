use chrono::{DateTime, Duration, Utc};

use tf_core::{Article, Category, Sentiment};

use tf_engine::time_ago;

/// Built-in dataset served whenever the provider is unavailable: no key,
/// request failure, or an empty result. Three hand-labeled articles, aged
/// relative to `now`.
pub fn sample_articles(now: DateTime<Utc>) -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: "Stock Market Reaches New Heights as Tech Sector Leads Rally".to_string(),
            source: "Financial Times".to_string(),
            time: time_ago(now - Duration::hours(2), now),
            published_at: now - Duration::hours(2),
            image_url: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&q=80"
                .to_string(),
            category: Category::Stocks,
            sentiment: Sentiment::Positive,
            summary: "Major stock indices hit record highs today as technology stocks led a \
                      broad-based rally. The S&P 500 gained 1.8% while the Nasdaq jumped 2.3%, \
                      driven by strong earnings reports and optimistic economic forecasts."
                .to_string(),
            key_points: vec![
                "S&P 500 up 1.8%".to_string(),
                "Tech sector leading gains".to_string(),
                "Record trading volumes".to_string(),
            ],
            url: "#".to_string(),
        },
        Article {
            id: "2".to_string(),
            title: "Bitcoin Surges Past $48,000 on Institutional Demand".to_string(),
            source: "CoinDesk".to_string(),
            time: time_ago(now - Duration::hours(3), now),
            published_at: now - Duration::hours(3),
            image_url: "https://images.unsplash.com/photo-1518546305927-5a555bb7020d?w=800&q=80"
                .to_string(),
            category: Category::Crypto,
            sentiment: Sentiment::Positive,
            summary: "Bitcoin rallied above $48,000 driven by increased institutional buying \
                      and positive ETF inflows. Major investment firms report record demand for \
                      cryptocurrency exposure."
                .to_string(),
            key_points: vec![
                "BTC breaks $48K".to_string(),
                "ETF inflows surge".to_string(),
                "Institutional adoption grows".to_string(),
            ],
            url: "#".to_string(),
        },
        Article {
            id: "3".to_string(),
            title: "Federal Reserve Signals Potential Rate Cuts in Coming Months".to_string(),
            source: "Bloomberg".to_string(),
            time: time_ago(now - Duration::hours(5), now),
            published_at: now - Duration::hours(5),
            image_url: "https://images.unsplash.com/photo-1526304640581-d334cdbbf45e?w=800&q=80"
                .to_string(),
            category: Category::Markets,
            sentiment: Sentiment::Neutral,
            summary: "The Federal Reserve indicated it may consider interest rate cuts if \
                      inflation continues its downward trend. Market participants are pricing \
                      in multiple rate cuts this year."
                .to_string(),
            key_points: vec![
                "Rate cut expectations rise".to_string(),
                "Inflation showing signs of cooling".to_string(),
                "Market volatility expected".to_string(),
            ],
            url: "#".to_string(),
        },
    ]
}

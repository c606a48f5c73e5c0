use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use tf_core::{Category, Error, NewsProvider, Result};
use tf_engine::{compute_trending, Responder};
use tf_provider::{FeedFetcher, NewsApiClient};
use tf_session::Session;
use tf_web::{create_app, AppState};

const MARKET_TICK: Duration = Duration::from_secs(30);

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// NewsAPI key. Falls back to the NEWS_API_KEY environment variable;
    /// without a key the built-in sample feed is served.
    #[arg(long)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch the feed and print it
    Feed {
        /// Only show one category (Stocks, Crypto, Tech, Markets, Business)
        #[arg(long)]
        category: Option<String>,
        /// Substring filter on title/summary
        #[arg(long)]
        search: Option<String>,
    },
    /// Ask the assistant a question against a fresh feed
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
    /// Print trending topics for a fresh feed
    Trending,
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let api_key = cli.api_key.or_else(|| std::env::var("NEWS_API_KEY").ok());
    let provider: Arc<dyn NewsProvider> = Arc::new(NewsApiClient::new(api_key)?);
    let fetcher = FeedFetcher::new(provider.clone());

    match cli.command {
        Commands::Feed { category, search } => {
            let category = category
                .map(|raw| raw.parse::<Category>().map_err(Error::Session))
                .transpose()?;

            let session = Session::new();
            session.replace_articles(fetcher.refresh().await).await;

            let articles = session.filtered_articles(category, search.as_deref()).await;
            info!(articles = articles.len(), "feed ready");
            for article in articles {
                println!("[{}] {}", article.category, article.title);
                println!("    {} · {} · {}", article.source, article.time, article.sentiment.label());
                println!("    {}", article.summary);
                for point in &article.key_points {
                    println!("      • {}", point);
                }
            }
        }
        Commands::Ask { question } => {
            let question = question.join(" ");
            let articles = fetcher.refresh().await;
            let responder = Responder::new(provider.clone());
            let reply = responder.respond(&question, &articles).await;
            println!("{}", reply.text);
        }
        Commands::Trending => {
            let articles = fetcher.refresh().await;
            for topic in compute_trending(&articles) {
                println!("{:>4}  {}", topic.count, topic.keyword);
            }
        }
        Commands::Serve { addr } => {
            serve(&addr, provider, fetcher).await?;
        }
    }

    Ok(())
}

async fn serve(addr: &str, provider: Arc<dyn NewsProvider>, fetcher: FeedFetcher) -> Result<()> {
    let session = Session::new();
    session.replace_articles(fetcher.refresh().await).await;

    // Periodic driver for the simulated ticker; the session itself never
    // schedules anything.
    let ticker = session.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(MARKET_TICK);
        loop {
            interval.tick().await;
            let mut rng = StdRng::from_entropy();
            ticker.tick_market(&mut rng).await;
        }
    });

    let state = AppState {
        session,
        fetcher,
        responder: Responder::new(provider),
    };
    let app = create_app(state).await;

    info!("📰 tickerfeed API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(anyhow::Error::from)?;
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;

    Ok(())
}

use tf_engine::Responder;
use tf_provider::FeedFetcher;
use tf_session::Session;

pub struct AppState {
    pub session: Session,
    pub fetcher: FeedFetcher,
    pub responder: Responder,
}

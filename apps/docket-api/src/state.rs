use std::sync::Arc;

use docket_domain::{Clock, IdempotencyGate, RateLimiter, SystemClock};
use docket_service::SearchService;
use docket_storage::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}

impl AppState {
	pub async fn new(config: docket_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let clock: Arc<dyn Clock> = Arc::new(SystemClock);
		let gate = IdempotencyGate::from_config(&config.admission, clock.clone());
		let limiter = RateLimiter::from_config(&config.admission, clock);
		let service = SearchService::new(config, gate, limiter, Arc::new(db));

		Ok(Self { service: Arc::new(service) })
	}
}

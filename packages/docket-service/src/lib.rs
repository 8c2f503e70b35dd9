pub mod date_serde;
pub mod search;
pub mod source;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

use docket_config::Config;
use docket_domain::{FieldOverlapScoring, IdempotencyGate, MatchScoring, RateLimiter};

pub use error::{Error, INVALID_PAGINATION, INVALID_SSN_LAST4, MISSING_SEARCH_KEY, ServiceResult};
pub use search::{CaseDto, PersonMatch, SearchRequest, SearchResponse};
pub use source::RowSource;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const API_VERSION: &str = "v1";

/// Orchestrates one search: admission, validation, row fetch, aggregation,
/// scoring, ranking, envelope assembly. The admission gates are process-wide
/// shared state owned here and passed in explicitly at construction.
pub struct SearchService {
	pub(crate) config: Config,
	pub(crate) gate: IdempotencyGate,
	pub(crate) limiter: RateLimiter,
	pub(crate) scorer: Box<dyn MatchScoring>,
	pub(crate) source: Arc<dyn RowSource>,
}

impl SearchService {
	pub fn new(
		config: Config,
		gate: IdempotencyGate,
		limiter: RateLimiter,
		source: Arc<dyn RowSource>,
	) -> Self {
		let scorer = scorer_for(&config.search);

		Self { config, gate, limiter, scorer, source }
	}
}

fn scorer_for(cfg: &docket_config::Search) -> Box<dyn MatchScoring> {
	// Config validation restricts the name to implemented strategies; a config
	// that bypassed validation must not silently fork scoring behavior.
	match cfg.scoring.as_str() {
		"field_overlap" => Box::new(FieldOverlapScoring),
		other => {
			debug_assert!(false, "unrecognized scoring strategy: {other}");
			tracing::warn!(strategy = other, "Unrecognized scoring strategy, using field_overlap.");

			Box::new(FieldOverlapScoring)
		},
	}
}

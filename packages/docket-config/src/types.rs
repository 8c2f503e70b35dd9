use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub admission: Admission,
	pub search: Search,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

/// Admission-control knobs shared by the idempotency gate and the rate limiter.
#[derive(Debug, Deserialize)]
pub struct Admission {
	/// How long a client request id stays "seen" before it may be reused.
	#[serde(default = "default_request_id_ttl_secs")]
	pub request_id_ttl_secs: u64,
	/// Maximum tracked request ids; the oldest are evicted beyond this.
	#[serde(default = "default_admission_capacity")]
	pub request_id_capacity: u32,
	/// Requests allowed per key within one rate window.
	#[serde(default = "default_rate_limit")]
	pub rate_limit: u32,
	#[serde(default = "default_rate_window_secs")]
	pub rate_window_secs: u64,
	#[serde(default = "default_admission_capacity")]
	pub rate_capacity: u32,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	#[serde(default = "default_max_page_size")]
	pub max_page_size: u32,
	/// Scoring strategy. Only "field_overlap" is implemented.
	#[serde(default = "default_scoring")]
	pub scoring: String,
	/// Result ordering. Only "recency" is implemented; relevance-first ranking
	/// would be a distinct mode, not a drop-in swap.
	#[serde(default = "default_ranking")]
	pub ranking: String,
}

fn default_request_id_ttl_secs() -> u64 {
	600
}

fn default_admission_capacity() -> u32 {
	100_000
}

fn default_rate_limit() -> u32 {
	60
}

fn default_rate_window_secs() -> u64 {
	30
}

fn default_page_size() -> u32 {
	50
}

fn default_max_page_size() -> u32 {
	500
}

fn default_scoring() -> String {
	"field_overlap".to_string()
}

fn default_ranking() -> String {
	"recency".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdmissionError {
	#[error("request_id must be unique for each request: {request_id}")]
	DuplicateRequestId { request_id: String },
	#[error("Rate limit exceeded for this key.")]
	RateLimited { retry_after_seconds: u64 },
}

use docket_domain::AdmissionError;

pub type ServiceResult<T> = Result<T, Error>;

pub const MISSING_SEARCH_KEY: &str = "MISSING_SEARCH_KEY";
pub const INVALID_PAGINATION: &str = "INVALID_PAGINATION";
pub const INVALID_SSN_LAST4: &str = "INVALID_SSN_LAST4";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	InvalidRequest { code: &'static str, message: String },
	#[error("request_id must be unique for each request: {request_id}")]
	DuplicateRequestId { request_id: String },
	#[error("Rate limit exceeded for this key.")]
	RateLimited { retry_after_seconds: u64 },
	#[error("Storage error: {message}")]
	Storage { message: String },
}

impl From<AdmissionError> for Error {
	fn from(err: AdmissionError) -> Self {
		match err {
			AdmissionError::DuplicateRequestId { request_id } =>
				Self::DuplicateRequestId { request_id },
			AdmissionError::RateLimited { retry_after_seconds } =>
				Self::RateLimited { retry_after_seconds },
		}
	}
}

impl From<docket_storage::Error> for Error {
	fn from(err: docket_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

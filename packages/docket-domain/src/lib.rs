pub mod admission;
pub mod aggregate;
pub mod clock;
pub mod error;
pub mod expiring;
pub mod masking;
pub mod model;
pub mod ranking;
pub mod scoring;

pub use admission::{IdempotencyGate, RateLimiter};
pub use aggregate::aggregate;
pub use clock::{Clock, SystemClock};
pub use error::AdmissionError;
pub use expiring::ExpiringKeyStore;
pub use masking::mask_driver_license;
pub use model::{
	CaseRecord, IdentityKey, PersonCluster, RawCaseRow, SearchQuery, combine_driver_license,
};
pub use ranking::{max_file_date, rank};
pub use scoring::{FieldOverlapScoring, MatchScoring};

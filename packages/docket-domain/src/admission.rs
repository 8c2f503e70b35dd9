use std::{sync::Arc, time::Duration};

use crate::{clock::Clock, error::AdmissionError, expiring::ExpiringKeyStore};

/// Rejects a request whose identifier was already seen within the retention
/// window. A missing or blank identifier means the caller opted out of the
/// check and always admits; callers that require an identifier enforce its
/// presence upstream.
pub struct IdempotencyGate {
	seen: ExpiringKeyStore<String, ()>,
}

impl IdempotencyGate {
	pub fn new(retention: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
		Self { seen: ExpiringKeyStore::new(retention, capacity, clock) }
	}

	pub fn from_config(cfg: &docket_config::Admission, clock: Arc<dyn Clock>) -> Self {
		Self::new(
			Duration::from_secs(cfg.request_id_ttl_secs),
			cfg.request_id_capacity as usize,
			clock,
		)
	}

	pub fn admit(&self, request_id: Option<&str>) -> Result<(), AdmissionError> {
		let Some(request_id) = request_id.map(str::trim).filter(|id| !id.is_empty()) else {
			return Ok(());
		};

		if self.seen.put_if_absent(request_id.to_string(), ()) {
			Ok(())
		} else {
			Err(AdmissionError::DuplicateRequestId { request_id: request_id.to_string() })
		}
	}
}

/// Fixed-window rate limiter. Each key's counter resets `window` after its
/// first increment in the current window, not on a sliding horizon.
pub struct RateLimiter {
	counters: ExpiringKeyStore<String, u32>,
	limit: u32,
	window: Duration,
}

impl RateLimiter {
	pub fn new(limit: u32, window: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
		Self { counters: ExpiringKeyStore::new(window, capacity, clock), limit, window }
	}

	pub fn from_config(cfg: &docket_config::Admission, clock: Arc<dyn Clock>) -> Self {
		Self::new(
			cfg.rate_limit,
			Duration::from_secs(cfg.rate_window_secs),
			cfg.rate_capacity as usize,
			clock,
		)
	}

	/// A missing key is valid and degenerate: all such callers share one
	/// counter under the empty key.
	pub fn check(&self, key: Option<&str>) -> Result<(), AdmissionError> {
		let count = self.counters.increment_and_get(key.unwrap_or_default().to_string());

		if count > self.limit {
			// The per-key window boundary is not tracked separately, so the
			// hint is the window length rather than the remaining time.
			Err(AdmissionError::RateLimited { retry_after_seconds: self.window.as_secs() })
		} else {
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::expiring::tests::ManualClock;

	fn gate(retention_secs: u64) -> (IdempotencyGate, Arc<ManualClock>) {
		let clock = Arc::new(ManualClock::starting_now());
		let gate =
			IdempotencyGate::new(Duration::from_secs(retention_secs), 100, clock.clone());

		(gate, clock)
	}

	#[test]
	fn duplicate_request_id_is_rejected() {
		let (gate, _clock) = gate(600);

		assert_eq!(gate.admit(Some("X")), Ok(()));
		assert_eq!(
			gate.admit(Some("X")),
			Err(AdmissionError::DuplicateRequestId { request_id: "X".to_string() })
		);
		assert_eq!(gate.admit(Some("Y")), Ok(()));
	}

	#[test]
	fn missing_or_blank_request_id_always_admits() {
		let (gate, _clock) = gate(600);

		assert_eq!(gate.admit(None), Ok(()));
		assert_eq!(gate.admit(None), Ok(()));
		assert_eq!(gate.admit(Some("")), Ok(()));
		assert_eq!(gate.admit(Some("   ")), Ok(()));
	}

	#[test]
	fn request_id_may_be_reused_after_retention() {
		let (gate, clock) = gate(600);

		assert_eq!(gate.admit(Some("X")), Ok(()));

		clock.advance(Duration::from_secs(600));

		assert_eq!(gate.admit(Some("X")), Ok(()));
	}

	#[test]
	fn limit_admits_then_rejects_with_window_hint() {
		let clock = Arc::new(ManualClock::starting_now());
		let limiter = RateLimiter::new(60, Duration::from_secs(30), 100, clock);

		for _ in 0..60 {
			assert_eq!(limiter.check(Some("k")), Ok(()));
		}

		assert_eq!(
			limiter.check(Some("k")),
			Err(AdmissionError::RateLimited { retry_after_seconds: 30 })
		);
	}

	#[test]
	fn keys_are_counted_independently() {
		let clock = Arc::new(ManualClock::starting_now());
		let limiter = RateLimiter::new(2, Duration::from_secs(30), 100, clock);

		assert_eq!(limiter.check(Some("a")), Ok(()));
		assert_eq!(limiter.check(Some("a")), Ok(()));
		assert_eq!(limiter.check(Some("b")), Ok(()));
		assert!(limiter.check(Some("a")).is_err());
		assert_eq!(limiter.check(Some("b")), Ok(()));
	}

	#[test]
	fn window_reset_clears_the_counter() {
		let clock = Arc::new(ManualClock::starting_now());
		let limiter = RateLimiter::new(2, Duration::from_secs(30), 100, clock.clone());

		assert_eq!(limiter.check(Some("k")), Ok(()));
		assert_eq!(limiter.check(Some("k")), Ok(()));
		assert!(limiter.check(Some("k")).is_err());

		clock.advance(Duration::from_secs(30));

		assert_eq!(limiter.check(Some("k")), Ok(()));
	}

	#[test]
	fn missing_key_shares_one_counter() {
		let clock = Arc::new(ManualClock::starting_now());
		let limiter = RateLimiter::new(2, Duration::from_secs(30), 100, clock);

		assert_eq!(limiter.check(None), Ok(()));
		assert_eq!(limiter.check(Some("")), Ok(()));
		assert!(limiter.check(None).is_err());
	}
}

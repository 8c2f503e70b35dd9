use std::time::Instant;

/// Time source for expiry decisions. Production uses [`SystemClock`]; tests
/// inject a manually advanced clock.
pub trait Clock
where
	Self: Send + Sync,
{
	fn now(&self) -> Instant;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> Instant {
		Instant::now()
	}
}

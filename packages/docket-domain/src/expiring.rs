use std::{
	collections::VecDeque,
	hash::Hash,
	sync::{Arc, Mutex, PoisonError},
	time::{Duration, Instant},
};

use ahash::AHashMap;

use crate::clock::Clock;

struct Entry<V> {
	value: V,
	written_at: Instant,
}

struct Inner<K, V> {
	entries: AHashMap<K, Entry<V>>,
	// Creation-order queue driving expiry sweeps and capacity eviction. A slot's
	// timestamp doubles as a liveness token: when it no longer matches the map
	// entry's `written_at`, the slot refers to a dead generation and is skipped.
	order: VecDeque<(K, Instant)>,
}

/// Bounded key-value map with a per-entry time-to-live measured from entry
/// creation. Entries past their TTL are logically absent even before they are
/// physically purged; at capacity the oldest-created entry is evicted first.
///
/// Every operation takes one short critical section, so callers need no
/// external synchronization.
pub struct ExpiringKeyStore<K, V> {
	inner: Mutex<Inner<K, V>>,
	ttl: Duration,
	capacity: usize,
	clock: Arc<dyn Clock>,
}

impl<K, V> ExpiringKeyStore<K, V>
where
	K: Eq + Hash + Clone,
{
	pub fn new(ttl: Duration, capacity: usize, clock: Arc<dyn Clock>) -> Self {
		Self {
			inner: Mutex::new(Inner { entries: AHashMap::new(), order: VecDeque::new() }),
			ttl,
			capacity: capacity.max(1),
			clock,
		}
	}

	/// Inserts `value` under `key` unless a live entry already exists. Returns
	/// true on insertion; an expired entry counts as absent and is replaced.
	pub fn put_if_absent(&self, key: K, value: V) -> bool {
		let now = self.clock.now();
		let mut inner = self.lock();

		self.sweep(&mut inner, now);

		if let Some(entry) = inner.entries.get(&key)
			&& Self::is_live(entry, now, self.ttl)
		{
			return false;
		}

		self.insert(&mut inner, key, value, now);

		true
	}

	/// Number of live entries.
	pub fn len(&self) -> usize {
		let now = self.clock.now();
		let mut inner = self.lock();

		self.sweep(&mut inner, now);

		inner.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn lock(&self) -> std::sync::MutexGuard<'_, Inner<K, V>> {
		self.inner.lock().unwrap_or_else(PoisonError::into_inner)
	}

	fn is_live(entry: &Entry<V>, now: Instant, ttl: Duration) -> bool {
		now.duration_since(entry.written_at) < ttl
	}

	// Entries share one TTL and the queue is creation-ordered, so everything
	// expired sits at the front; the sweep stops at the first live slot.
	fn sweep(&self, inner: &mut Inner<K, V>, now: Instant) {
		while let Some((key, written_at)) = inner.order.front() {
			match inner.entries.get(key) {
				Some(entry) if entry.written_at == *written_at => {
					if Self::is_live(entry, now, self.ttl) {
						break;
					}

					let key = key.clone();

					inner.entries.remove(&key);
					inner.order.pop_front();
				},
				// Stale slot from a replaced or evicted generation.
				_ => {
					inner.order.pop_front();
				},
			}
		}
	}

	fn insert(&self, inner: &mut Inner<K, V>, key: K, value: V, now: Instant) {
		inner.entries.insert(key.clone(), Entry { value, written_at: now });
		inner.order.push_back((key, now));

		while inner.entries.len() > self.capacity {
			let Some((key, written_at)) = inner.order.pop_front() else {
				break;
			};

			if inner.entries.get(&key).map(|entry| entry.written_at == written_at).unwrap_or(false)
			{
				inner.entries.remove(&key);
			}
		}
	}
}

impl<K> ExpiringKeyStore<K, u32>
where
	K: Eq + Hash + Clone,
{
	/// Creates a zero counter when no live entry exists, then increments and
	/// returns the new value. The TTL runs from counter creation; increments do
	/// not extend it.
	pub fn increment_and_get(&self, key: K) -> u32 {
		let now = self.clock.now();
		let mut inner = self.lock();

		self.sweep(&mut inner, now);

		let live = inner
			.entries
			.get(&key)
			.map(|entry| Self::is_live(entry, now, self.ttl))
			.unwrap_or(false);

		if !live {
			self.insert(&mut inner, key.clone(), 0, now);
		}

		match inner.entries.get_mut(&key) {
			Some(entry) => {
				entry.value += 1;
				entry.value
			},
			// The fresh entry can only be missing if it was evicted by its own
			// insertion, which the capacity floor of one rules out.
			None => 1,
		}
	}
}

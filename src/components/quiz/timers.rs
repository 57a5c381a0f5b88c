//! Cancellable deferred actions polled against a millisecond clock.
//!
//! Each pending action is identified by a key; scheduling a key that is
//! already pending replaces it. Actions may be scoped to a screen so leaving
//! that screen cancels them before they can touch stale state.

#[derive(Clone, Debug, PartialEq)]
struct Pending<K, S> {
	key: K,
	scope: Option<S>,
	due_ms: f64,
}

/// Pending deferred actions keyed by `K`, optionally scoped by `S`.
#[derive(Clone, Debug, PartialEq)]
pub struct Timers<K, S> {
	pending: Vec<Pending<K, S>>,
}

impl<K, S> Default for Timers<K, S> {
	fn default() -> Self {
		Self {
			pending: Vec::new(),
		}
	}
}

impl<K: Copy + PartialEq, S: Copy + PartialEq> Timers<K, S> {
	/// Fire `key` at `now_ms + delay_ms`, replacing any pending timer with
	/// the same key.
	pub fn schedule(&mut self, key: K, scope: Option<S>, now_ms: f64, delay_ms: f64) {
		self.cancel(key);
		self.pending.push(Pending {
			key,
			scope,
			due_ms: now_ms + delay_ms,
		});
	}

	pub fn cancel(&mut self, key: K) {
		self.pending.retain(|p| p.key != key);
	}

	/// Drop every timer scoped to `scope`.
	pub fn cancel_scope(&mut self, scope: S) {
		self.pending.retain(|p| p.scope != Some(scope));
	}

	pub fn is_pending(&self, key: K) -> bool {
		self.pending.iter().any(|p| p.key == key)
	}

	pub fn has_due(&self, now_ms: f64) -> bool {
		self.pending.iter().any(|p| p.due_ms <= now_ms)
	}

	/// Remove and return the keys due at `now_ms`, earliest first.
	pub fn take_due(&mut self, now_ms: f64) -> Vec<K> {
		let mut due: Vec<Pending<K, S>> = Vec::new();
		self.pending.retain(|p| {
			if p.due_ms <= now_ms {
				due.push(p.clone());
				false
			} else {
				true
			}
		});
		due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
		due.into_iter().map(|p| p.key).collect()
	}
}

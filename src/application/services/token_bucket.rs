use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::application::ports::Clock;

/// Daily token budget for LLM calls, refilled continuously at a per-minute rate.
///
/// Refill is computed lazily on every `consume` call. The bucket starts full
/// and never holds more than its daily capacity.
pub struct TokenBucket {
    tokens_per_minute: u32,
    capacity: u32,
    clock: Arc<dyn Clock>,
    state: Mutex<BucketState>,
}

struct BucketState {
    available: f64,
    last_refill: Instant,
}

impl TokenBucket {
    pub fn new(tokens_per_minute: u32, tokens_per_day: u32, clock: Arc<dyn Clock>) -> Self {
        let last_refill = clock.now();
        Self {
            tokens_per_minute,
            capacity: tokens_per_day,
            clock,
            state: Mutex::new(BucketState {
                available: f64::from(tokens_per_day),
                last_refill,
            }),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn tokens_per_minute(&self) -> u32 {
        self.tokens_per_minute
    }

    pub fn refill_rate_per_second(&self) -> f64 {
        f64::from(self.tokens_per_minute) / 60.0
    }

    /// Tokens currently held, as of the last refill.
    pub fn available(&self) -> f64 {
        self.state.lock().available
    }

    /// Refills, then takes `amount` tokens if that many are available.
    /// A refused request leaves the balance untouched.
    pub fn consume(&self, amount: u32) -> bool {
        let mut state = self.state.lock();

        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(state.last_refill);
        let refilled = state.available + elapsed.as_secs_f64() * self.refill_rate_per_second();
        state.available = refilled.min(f64::from(self.capacity));
        if now > state.last_refill {
            state.last_refill = now;
        }

        let requested = f64::from(amount);
        if state.available >= requested {
            state.available -= requested;
            true
        } else {
            tracing::debug!(
                requested = amount,
                available = state.available,
                "Token bucket refused request"
            );
            false
        }
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Opaque identifier of an indicator config instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IndicatorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Source of fresh config ids.
///
/// Owned by a `ConfigFactory`; implementations must be safe to call from
/// several threads at once and must never hand out the same id twice.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> IndicatorId;
}

/// Monotonic counter: `ind-1`, `ind-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix("ind")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> IndicatorId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        IndicatorId(format!("{}-{n}", self.prefix))
    }
}

/// Random 64-bit ids rendered as 16 hex digits, drawn from a seeded `StdRng`.
///
/// The same seed yields the same id sequence, which keeps fixtures stable.
/// Draws are not deduplicated: a repeat among 64-bit draws is not expected
/// within one factory's lifetime.
#[derive(Debug)]
pub struct SeededIds {
    rng: Mutex<StdRng>,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl IdSource for SeededIds {
    fn next_id(&self) -> IndicatorId {
        // A poisoned lock only means another caller panicked mid-draw; the
        // rng state is still usable.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let raw: u64 = rng.gen();
        IndicatorId(format!("{raw:016x}"))
    }
}

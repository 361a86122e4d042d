//! Fixed clock adapter for deterministic time in tests.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Clock frozen at a fixed instant.
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at the given RFC 3339 instant.
    ///
    /// # Panics
    ///
    /// Panics if `rfc3339` does not parse; intended for test setup.
    #[must_use]
    pub fn at(rfc3339: &str) -> Self {
        let instant = DateTime::parse_from_rfc3339(rfc3339)
            .expect("invalid RFC 3339 instant")
            .with_timezone(&Utc);
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

//! Time sources for block timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the timestamp, in seconds since the Unix epoch, stamped on new blocks.
pub trait Clock {
    fn now(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs() as i64,
            // clock set before 1970
            Err(err) => -(err.duration().as_secs() as i64),
        }
    }
}

/// Always returns the same timestamp. Makes mining deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

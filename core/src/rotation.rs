//! Periodic rotation of the highlighted testimonial.
//!
//! The host drives time: it reports elapsed durations through `advance`,
//! the same way it executes HTTP requests for the client. Stopping clears
//! the pending interval; a list with a new identity restarts from the first
//! item.

use std::time::Duration;

pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    interval: Duration,
    current: usize,
    len: usize,
    identity: Option<u64>,
    pending: Duration,
    running: bool,
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(ROTATION_INTERVAL)
    }
}

impl Rotation {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            current: 0,
            len: 0,
            identity: None,
            pending: Duration::ZERO,
            running: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start rotating over `len` items belonging to list `identity`.
    pub fn start(&mut self, len: usize, identity: u64) {
        self.len = len;
        self.identity = Some(identity);
        self.current = 0;
        self.pending = Duration::ZERO;
        self.running = len > 0 && !self.interval.is_zero();
    }

    /// Restart only if the list changed identity.
    pub fn sync(&mut self, len: usize, identity: u64) {
        if self.identity != Some(identity) || !self.running {
            self.start(len, identity);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.pending = Duration::ZERO;
    }

    /// Account for `elapsed` time and return the index to highlight.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if !self.running {
            return self.current;
        }
        self.pending += elapsed;
        let interval = self.interval.as_nanos();
        let ticks = self.pending.as_nanos() / interval;
        if ticks > 0 {
            self.current = ((self.current as u128 + ticks) % self.len as u128) as usize;
            let remainder = self.pending.as_nanos() % interval;
            self.pending = Duration::from_nanos(remainder as u64);
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_once_per_interval_and_wraps() {
        let mut rotation = Rotation::default();
        rotation.start(4, 1);
        assert_eq!(rotation.advance(Duration::from_millis(4999)), 0);
        assert_eq!(rotation.advance(Duration::from_millis(1)), 1);
        assert_eq!(rotation.advance(Duration::from_secs(15)), 0);
    }

    #[test]
    fn stopped_rotation_does_not_move() {
        let mut rotation = Rotation::default();
        rotation.start(4, 1);
        rotation.advance(Duration::from_secs(5));
        rotation.stop();
        assert_eq!(rotation.advance(Duration::from_secs(60)), 1);
        assert!(!rotation.is_running());
    }

    #[test]
    fn new_identity_restarts() {
        let mut rotation = Rotation::default();
        rotation.start(4, 1);
        rotation.advance(Duration::from_secs(10));
        rotation.sync(4, 1);
        assert_eq!(rotation.current(), 2);
        rotation.sync(3, 2);
        assert_eq!(rotation.current(), 0);
        assert_eq!(rotation.advance(Duration::from_secs(5)), 1);
    }

    #[test]
    fn empty_list_never_runs() {
        let mut rotation = Rotation::default();
        rotation.start(0, 1);
        assert!(!rotation.is_running());
        assert_eq!(rotation.advance(Duration::from_secs(30)), 0);
    }
}

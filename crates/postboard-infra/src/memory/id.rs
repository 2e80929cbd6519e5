//! Timestamp-based post ids.

use chrono::Utc;

/// Issues ids from the wall clock in Unix milliseconds.
///
/// Ids are strictly increasing: a create in the same millisecond as the
/// previous one, or after the clock stepped back, gets `last + 1`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the current time.
    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id given the current time in milliseconds.
    pub fn next_at(&mut self, now_ms: i64) -> String {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_the_timestamp() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_700_000_000_000), "1700000000000");
        assert_eq!(ids.next_at(1_700_000_000_050), "1700000000050");
    }

    #[test]
    fn test_same_millisecond_bumps() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_000), "1000");
        assert_eq!(ids.next_at(1_000), "1001");
        assert_eq!(ids.next_at(1_000), "1002");
    }

    #[test]
    fn test_clock_going_backwards_stays_unique() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(5_000), "5000");
        assert_eq!(ids.next_at(4_000), "5001");
        assert_eq!(ids.next_at(6_000), "6000");
    }

    #[test]
    fn test_wall_clock_ids_are_non_empty() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }
}

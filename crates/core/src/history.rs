use crate::reading::Reading;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Rolling window of the most recent readings, oldest first.
///
/// Only the feed mutates it; everyone else reads snapshots.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    readings: VecDeque<Reading>,
    capacity: NonZeroUsize,
}

impl HistoryBuffer {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            readings: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Push a new reading, evicting the oldest if at capacity.
    ///
    /// Returns the evicted reading, if any.
    pub fn push(&mut self, reading: Reading) -> Option<Reading> {
        let evicted = if self.readings.len() == self.capacity.get() {
            self.readings.pop_front()
        } else {
            None
        };
        self.readings.push_back(reading);
        evicted
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Most recently pushed reading.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// Owned copy of the contents in arrival order.
    pub fn snapshot(&self) -> Vec<Reading> {
        self.readings.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(i: usize) -> Reading {
        Reading::new(100.0 + i as f64, format!("2024-03-01 12:00:{i:02}"))
    }

    fn buffer(cap: usize) -> HistoryBuffer {
        HistoryBuffer::new(NonZeroUsize::new(cap).unwrap())
    }

    #[test]
    fn keeps_last_n_in_arrival_order() {
        for extra in 0..6 {
            let mut buf = buffer(5);
            let produced: Vec<Reading> = (0..5 + extra).map(reading).collect();
            for r in &produced {
                buf.push(r.clone());
            }
            assert_eq!(buf.len(), 5);
            assert_eq!(buf.snapshot(), produced[produced.len() - 5..].to_vec());
        }
    }

    #[test]
    fn seven_ticks_leave_r3_through_r7() {
        let mut buf = buffer(5);
        let produced: Vec<Reading> = (1..=7).map(reading).collect();
        for r in &produced {
            buf.push(r.clone());
        }
        assert_eq!(buf.snapshot(), produced[2..].to_vec());
        assert_eq!(buf.latest(), produced.last());
    }

    #[test]
    fn push_reports_evicted_reading() {
        let mut buf = buffer(2);
        assert!(buf.push(reading(0)).is_none());
        assert!(buf.push(reading(1)).is_none());
        assert_eq!(buf.push(reading(2)), Some(reading(0)));
    }

    #[test]
    fn below_capacity_nothing_is_evicted() {
        let mut buf = buffer(5);
        buf.push(reading(0));
        buf.push(reading(1));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 5);
    }
}

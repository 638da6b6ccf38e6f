use crate::generator::CostGenerator;
use dash_config::FeedConfig;
use dash_core::{HistoryBuffer, LiveSnapshot};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Latest published snapshot; `None` before the first tick.
pub type SnapshotReceiver = watch::Receiver<Option<Arc<LiveSnapshot>>>;

/// Owns the history buffer and is its only writer.
///
/// Each call to [`LiveFeed::produce_and_append`] draws one reading, appends
/// it and publishes the resulting snapshot to every subscriber.
pub struct LiveFeed {
    history:   HistoryBuffer,
    generator: CostGenerator,
    updates:   watch::Sender<Option<Arc<LiveSnapshot>>>,
    ticks:     u64,
}

impl LiveFeed {
    pub fn new(capacity: NonZeroUsize, generator: CostGenerator) -> Self {
        Self {
            history: HistoryBuffer::new(capacity),
            generator,
            updates: watch::Sender::new(None),
            ticks: 0,
        }
    }

    pub fn from_config(cfg: &FeedConfig) -> Self {
        Self::new(cfg.capacity(), CostGenerator::new(cfg))
    }

    /// Produce one reading, append it (evicting the oldest at capacity) and
    /// publish the new snapshot.
    pub fn produce_and_append(&mut self) -> Arc<LiveSnapshot> {
        let reading = self.generator.next_reading();
        let evicted = self.history.push(reading.clone());
        self.ticks += 1;

        debug!(
            tick = self.ticks,
            cost = reading.cost(),
            timestamp = reading.timestamp(),
            evicted = evicted.is_some(),
            "Reading appended"
        );

        let snapshot = Arc::new(LiveSnapshot::new(self.history.snapshot(), reading));
        self.updates.send_replace(Some(Arc::clone(&snapshot)));
        snapshot
    }

    /// Read-only view of the buffer.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Most recently published snapshot.
    pub fn latest(&self) -> Option<Arc<LiveSnapshot>> {
        self.updates.borrow().clone()
    }

    /// Register for "buffer updated" notifications.
    pub fn subscribe(&self) -> SnapshotReceiver {
        self.updates.subscribe()
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Resolves once every subscriber has gone away.
    pub async fn closed(&self) {
        self.updates.closed().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_shareable<T: Send + Sync>() {}

    #[test]
    fn feed_can_move_into_a_spawned_task() {
        assert_shareable::<LiveFeed>();
    }

    fn feed(capacity: usize) -> LiveFeed {
        let cfg = FeedConfig {
            capacity,
            seed: Some(11),
            ..FeedConfig::default()
        };
        LiveFeed::from_config(&cfg)
    }

    #[test]
    fn seven_ticks_keep_last_five() {
        let mut feed = feed(5);
        let produced: Vec<_> = (0..7)
            .map(|_| feed.produce_and_append().latest.clone())
            .collect();

        let snap = feed.latest().unwrap();
        assert_eq!(snap.readings, produced[2..].to_vec());
        assert_eq!(snap.latest, produced[6]);
        assert_eq!(feed.history().len(), 5);
        assert_eq!(feed.ticks(), 7);
    }

    #[test]
    fn snapshot_parts_agree() {
        let mut feed = feed(3);
        feed.produce_and_append();
        let snap = feed.produce_and_append();
        assert_eq!(snap.readings.len(), 2);
        assert_eq!(snap.table.to_readings(), snap.readings);
        assert_eq!(snap.readings.last(), Some(&snap.latest));
    }

    #[test]
    fn published_snapshots_are_not_mutated_later() {
        let mut feed = feed(2);
        let first = feed.produce_and_append();
        feed.produce_and_append();
        feed.produce_and_append();
        assert_eq!(first.readings.len(), 1);
    }

    #[test]
    fn subscribers_are_notified() {
        let mut feed = feed(5);
        let mut rx = feed.subscribe();
        assert!(rx.borrow().is_none());

        let snap = feed.produce_and_append();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_deref(), Some(&*snap));
    }
}

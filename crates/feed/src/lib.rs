pub mod feed;
pub mod generator;

pub use feed::{LiveFeed, SnapshotReceiver};
pub use generator::{Clock, CostGenerator, SystemClock};

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

/// Spawn a background Tokio task that ticks `feed` every `interval` and
/// publishes each snapshot through the returned receiver.
///
/// The first tick fires immediately. Ticks never overlap; a late tick is
/// pushed back rather than bursted. The task stops automatically once every
/// receiver has been dropped.
pub fn spawn_feed(mut feed: LiveFeed, interval: Duration) -> (SnapshotReceiver, JoinHandle<()>) {
    let rx = feed.subscribe();

    let handle = tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    feed.produce_and_append();
                }
                () = feed.closed() => {
                    info!("Feed has no subscribers left after {} ticks; stopping", feed.ticks());
                    break;
                }
            }
        }
    });

    (rx, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_config::FeedConfig;

    fn feed() -> LiveFeed {
        LiveFeed::from_config(&FeedConfig {
            seed: Some(5),
            ..FeedConfig::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_every_interval_and_keeps_last_five() {
        let (mut rx, handle) = spawn_feed(feed(), Duration::from_secs(2));
        let start = time::Instant::now();

        let mut latest = Vec::new();
        for tick in 1..=7usize {
            rx.changed().await.unwrap();
            let snap = rx.borrow_and_update().clone().unwrap();
            assert_eq!(snap.readings.len(), tick.min(5));
            latest.push(snap.latest.clone());
        }

        // First tick is immediate, the following six are 2s apart.
        assert_eq!(start.elapsed(), Duration::from_secs(12));
        let snap = rx.borrow().clone().unwrap();
        assert_eq!(snap.readings, latest[2..].to_vec());

        drop(rx);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_all_receivers_drop() {
        let (rx, handle) = spawn_feed(feed(), Duration::from_secs(2));
        let second = rx.clone();
        drop(rx);
        assert!(!handle.is_finished());
        drop(second);
        handle.await.unwrap();
    }
}

use chrono::{DateTime, Local};
use dash_config::FeedConfig;
use dash_core::reading::{round_to, Reading};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of capture times for new readings.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Local> + Send + Sync,
{
    fn now(&self) -> DateTime<Local> {
        self()
    }
}

/// Produces synthetic cost readings: a uniform draw over the configured
/// range, rounded, stamped with the current time.
pub struct CostGenerator {
    rng:              StdRng,
    cost_min:         f64,
    cost_max:         f64,
    decimals:         u32,
    timestamp_format: String,
    clock:            Box<dyn Clock>,
}

impl CostGenerator {
    /// Build a generator from a validated [`FeedConfig`].
    pub fn new(cfg: &FeedConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_os_rng(),
        };
        Self {
            rng,
            cost_min:         cfg.cost_min,
            cost_max:         cfg.cost_max,
            decimals:         cfg.decimals,
            timestamp_format: cfg.timestamp_format.clone(),
            clock:            Box::new(SystemClock),
        }
    }

    /// Replace the clock used to stamp readings.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn next_reading(&mut self) -> Reading {
        let raw = self.rng.random_range(self.cost_min..=self.cost_max);
        let cost = round_to(raw, self.decimals).clamp(self.cost_min, self.cost_max);
        let timestamp = self.clock.now().format(&self.timestamp_format).to_string();
        Reading::new(cost, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn config(seed: u64) -> FeedConfig {
        FeedConfig {
            seed: Some(seed),
            ..FeedConfig::default()
        }
    }

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 5).unwrap()
    }

    #[test]
    fn costs_stay_in_range_and_are_rounded() {
        let mut generator = CostGenerator::new(&config(7));
        for _ in 0..500 {
            let cost = generator.next_reading().cost();
            assert!((100.0..=120.0).contains(&cost), "{cost}");
            assert_eq!(round_to(cost, 2), cost);
        }
    }

    #[test]
    fn timestamp_uses_configured_pattern() {
        let mut generator = CostGenerator::new(&config(1)).with_clock(fixed_clock);
        assert_eq!(generator.next_reading().timestamp(), "2024-03-01 09:30:05");

        let cfg = FeedConfig {
            timestamp_format: "%H:%M".to_string(),
            ..config(1)
        };
        let mut generator = CostGenerator::new(&cfg).with_clock(fixed_clock);
        assert_eq!(generator.next_reading().timestamp(), "09:30");
    }

    #[test]
    fn same_seed_same_costs() {
        let mut a = CostGenerator::new(&config(42));
        let mut b = CostGenerator::new(&config(42));
        for _ in 0..10 {
            assert_eq!(a.next_reading().cost(), b.next_reading().cost());
        }
    }

    #[test]
    fn degenerate_range_yields_constant() {
        let cfg = FeedConfig {
            cost_min: 110.0,
            cost_max: 110.0,
            ..config(3)
        };
        let mut generator = CostGenerator::new(&cfg);
        assert_eq!(generator.next_reading().cost(), 110.0);
    }
}

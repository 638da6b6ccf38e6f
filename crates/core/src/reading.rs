use serde::{Deserialize, Serialize};

/// One synthetic cost observation.
///
/// Fields are private so a reading cannot change after it has been handed
/// to the history buffer or to a reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    cost:      f64,
    timestamp: String,
}

impl Reading {
    pub fn new(cost: f64, timestamp: impl Into<String>) -> Self {
        Self {
            cost,
            timestamp: timestamp.into(),
        }
    }

    /// Cost in dollars, already rounded by the generator.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Capture time, formatted with the configured pattern.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Round `value` half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_two_places() {
        assert_eq!(round_to(104.456, 2), 104.46);
        assert_eq!(round_to(104.454, 2), 104.45);
    }

    #[test]
    fn round_to_zero_places() {
        assert_eq!(round_to(119.5, 0), 120.0);
    }

    #[test]
    fn accessors_expose_construction_values() {
        let r = Reading::new(101.25, "2024-03-01 12:00:00");
        assert_eq!(r.cost(), 101.25);
        assert_eq!(r.timestamp(), "2024-03-01 12:00:00");
    }
}

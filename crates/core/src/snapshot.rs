use crate::{reading::Reading, regression::LinearFit, table::ReadingTable};

/// What a tick hands to readers: the buffer contents, their tabular
/// projection and the reading that was just produced.
///
/// Immutable once built; readers share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveSnapshot {
    /// Buffer contents in arrival order.
    pub readings: Vec<Reading>,
    /// One row per entry of `readings`.
    pub table:    ReadingTable,
    /// The reading created by the tick that produced this snapshot.
    pub latest:   Reading,
}

impl LiveSnapshot {
    pub fn new(readings: Vec<Reading>, latest: Reading) -> Self {
        let table = ReadingTable::from_readings(&readings);
        Self { readings, table, latest }
    }

    /// Trend line over `readings`, recomputed on every call.
    pub fn trend(&self) -> Option<LinearFit> {
        LinearFit::over_readings(&self.readings)
    }

    /// Mean cost of the window.
    pub fn mean_cost(&self) -> Option<f64> {
        if self.readings.is_empty() {
            return None;
        }
        Some(self.table.cost_column().iter().sum::<f64>() / self.readings.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_mirrors_readings() {
        let readings = vec![Reading::new(10.0, "a"), Reading::new(30.0, "b")];
        let snap = LiveSnapshot::new(readings.clone(), readings[1].clone());
        assert_eq!(snap.table.to_readings(), readings);
        assert_eq!(snap.latest.cost(), 30.0);
        assert_eq!(snap.mean_cost(), Some(20.0));
    }

    #[test]
    fn trend_is_stable_across_calls() {
        let readings = vec![
            Reading::new(10.0, "a"),
            Reading::new(20.0, "b"),
            Reading::new(30.0, "c"),
        ];
        let snap = LiveSnapshot::new(readings.clone(), readings[2].clone());
        assert_eq!(snap.trend(), snap.trend());
        assert_eq!(snap.trend().map(|f| f.slope), Some(10.0));
    }
}

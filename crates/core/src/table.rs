use crate::reading::Reading;

/// Column-oriented projection of a reading sequence, one row per reading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingTable {
    cost:      Vec<f64>,
    timestamp: Vec<String>,
}

impl ReadingTable {
    /// Column headers, in display order.
    pub const COLUMNS: [&'static str; 2] = ["cost", "timestamp"];

    pub fn from_readings(readings: &[Reading]) -> Self {
        Self {
            cost:      readings.iter().map(Reading::cost).collect(),
            timestamp: readings.iter().map(|r| r.timestamp().to_string()).collect(),
        }
    }

    /// Rebuild the readings the table was projected from.
    pub fn to_readings(&self) -> Vec<Reading> {
        self.cost
            .iter()
            .zip(&self.timestamp)
            .map(|(&cost, ts)| Reading::new(cost, ts.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }

    pub fn cost_column(&self) -> &[f64] {
        &self.cost
    }

    pub fn timestamp_column(&self) -> &[String] {
        &self.timestamp
    }

    /// Rows rendered as display strings, in `COLUMNS` order.
    pub fn rows(&self) -> impl Iterator<Item = [String; 2]> + '_ {
        self.cost
            .iter()
            .zip(&self.timestamp)
            .map(|(cost, ts)| [format!("{cost}"), ts.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Reading> {
        vec![
            Reading::new(101.5, "2024-03-01 12:00:00"),
            Reading::new(117.03, "2024-03-01 12:00:02"),
            Reading::new(109.99, "2024-03-01 12:00:04"),
        ]
    }

    #[test]
    fn projection_round_trips() {
        let readings = sample();
        let table = ReadingTable::from_readings(&readings);
        assert_eq!(table.len(), 3);
        assert_eq!(table.to_readings(), readings);
    }

    #[test]
    fn rows_follow_column_order() {
        let table = ReadingTable::from_readings(&sample());
        let first = table.rows().next().unwrap();
        assert_eq!(first, ["101.5".to_string(), "2024-03-01 12:00:00".to_string()]);
        assert_eq!(table.cost_column(), &[101.5, 117.03, 109.99]);
    }

    #[test]
    fn empty_projection() {
        let table = ReadingTable::from_readings(&[]);
        assert!(table.is_empty());
        assert_eq!(table.rows().count(), 0);
    }
}

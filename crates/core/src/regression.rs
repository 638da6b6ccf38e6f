//! Ordinary least-squares fit used for the trend line.

use crate::reading::Reading;

/// `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope:     f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit `points` by minimising squared residuals of `y` against `x`.
    ///
    /// Returns `None` for an empty input. When every `x` is equal (including
    /// the single-point case) the fit degenerates to a flat line through the
    /// mean of `y`.
    pub fn fit(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let n = points.len() as f64;
        let x_mean = points.iter().map(|p| p.0).sum::<f64>() / n;
        let y_mean = points.iter().map(|p| p.1).sum::<f64>() / n;

        let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), &(x, y)| {
            let dx = x - x_mean;
            (sxy + dx * (y - y_mean), sxx + dx * dx)
        });

        let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    /// Fit cost against 0-based arrival index.
    pub fn over_readings(readings: &[Reading]) -> Option<Self> {
        let points: Vec<(f64, f64)> = readings
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.cost()))
            .collect();
        Self::fit(&points)
    }

    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_line_through_three_points() {
        let fit = LinearFit::fit(&[(0.0, 10.0), (1.0, 20.0), (2.0, 30.0)]).unwrap();
        assert_eq!(fit.slope, 10.0);
        assert_eq!(fit.intercept, 10.0);
    }

    #[test]
    fn fit_over_readings_uses_arrival_index() {
        let readings = vec![
            Reading::new(10.0, "t0"),
            Reading::new(20.0, "t1"),
            Reading::new(30.0, "t2"),
        ];
        let fit = LinearFit::over_readings(&readings).unwrap();
        assert_eq!(fit, LinearFit { slope: 10.0, intercept: 10.0 });
        assert_eq!(fit.predict(4.0), 50.0);
    }

    #[test]
    fn empty_input_has_no_fit() {
        assert!(LinearFit::fit(&[]).is_none());
        assert!(LinearFit::over_readings(&[]).is_none());
    }

    #[test]
    fn single_point_is_flat() {
        let fit = LinearFit::fit(&[(0.0, 104.2)]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 104.2);
    }

    #[test]
    fn refitting_is_deterministic() {
        let points = [(0.0, 101.3), (1.0, 117.8), (2.0, 108.1), (3.0, 112.6), (4.0, 100.9)];
        assert_eq!(LinearFit::fit(&points), LinearFit::fit(&points));
    }

    #[test]
    fn noisy_points_minimise_residuals() {
        let fit = LinearFit::fit(&[(0.0, 0.0), (1.0, 4.0), (2.0, 4.0), (3.0, 8.0)]).unwrap();
        assert!((fit.slope - 2.4).abs() < 1e-12);
        assert!((fit.intercept - 0.4).abs() < 1e-12);
    }
}

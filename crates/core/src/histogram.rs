/// One equal-width bucket. `upper` is exclusive except for the last bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over a set of values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    /// Bucket `values` into `bin_count` bins spanning `[min, max]`.
    ///
    /// No values → no bins. A `bin_count` of zero is treated as one.
    pub fn from_values(values: impl IntoIterator<Item = f64>, bin_count: usize) -> Self {
        let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        let Some((min, max)) = bounds(&values) else {
            return Self::default();
        };

        let bin_count = bin_count.max(1);
        let width = (max - min) / bin_count as f64;
        let mut bins: Vec<Bin> = (0..bin_count)
            .map(|i| Bin {
                lower: min + width * i as f64,
                upper: if i + 1 == bin_count { max } else { min + width * (i + 1) as f64 },
                count: 0,
            })
            .collect();

        for v in values {
            let idx = if width == 0.0 {
                0
            } else {
                (((v - min) / width) as usize).min(bin_count - 1)
            };
            bins[idx].count += 1;
        }

        Self { bins }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Largest bin count, zero when empty.
    pub fn peak(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

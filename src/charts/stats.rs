use polars::prelude::*;

fn series(values: &[f64]) -> Float64Chunked {
    Float64Chunked::from_vec("values".into(), values.to_vec())
}

fn quantile(values: &Float64Chunked, q: f64) -> Option<f64> {
    values.quantile(q, QuantileMethod::Linear).ok().flatten()
}

/// Five-number summary with 1.5 IQR whiskers, as a box plot draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = series(values).sort(false);

        let q1 = quantile(&sorted, 0.25)?;
        let median = quantile(&sorted, 0.5)?;
        let q3 = quantile(&sorted, 0.75)?;
        let reach = 1.5 * (q3 - q1);

        let inside = &sorted.gt_eq(q1 - reach) & &sorted.lt_eq(q3 + reach);
        let whiskers = sorted.filter(&inside).ok()?;
        let outliers = sorted.filter(&!&inside).ok()?;

        Some(Self {
            q1,
            median,
            q3,
            whisker_low: whiskers.min()?,
            whisker_high: whiskers.max()?,
            outliers: outliers.into_no_null_iter().collect(),
        })
    }
}

/// Gaussian kernel density estimate sampled at `points` positions.
///
/// Uses Scott's rule for the bandwidth and extends the grid three bandwidths
/// past the data on both sides. Returns `(position, density)` pairs.
pub fn kde(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    let column = series(values);
    let (Some(min), Some(max)) = (column.min(), column.max()) else {
        return Vec::new();
    };
    if points < 2 {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mut bandwidth = column.std(1).unwrap_or(0.0) * n.powf(-0.2);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        bandwidth = 1.0;
    }

    let min = min - 3.0 * bandwidth;
    let max = max + 3.0 * bandwidth;
    let step = (max - min) / (points - 1) as f64;
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..points)
        .map(|i| {
            let x = min + step * i as f64;
            let density = values
                .iter()
                .map(|v| (-0.5 * ((x - v) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}

use crate::model::{EntityStats, RowStats, ScoreMatrix};

pub fn compute_stats(matrix: &ScoreMatrix) -> RowStats {
    let mut out = RowStats::with_capacity(matrix.n_rows());
    for row in matrix.rows() {
        out.push(entity_stats(row));
    }
    tracing::debug!(
        rows = matrix.n_rows(),
        cols = matrix.n_cols(),
        "computed per-row statistics"
    );
    out
}

pub fn entity_stats(values: &[f64]) -> EntityStats {
    let max = max_f64(values);
    let min = min_f64(values);
    if max == min {
        return EntityStats {
            mean: min,
            max,
            min,
            stddev: 0.0,
        };
    }

    let n = values.len() as f64;
    // Summation drift may push the mean just past the row extrema.
    let mean = (sum_f64(values) / n).clamp(min, max);
    let mut ss = 0f64;
    for &v in values {
        let d = v - mean;
        ss += d * d;
    }
    EntityStats {
        mean,
        max,
        min,
        stddev: (ss / n).sqrt(),
    }
}

pub fn column_means(matrix: &ScoreMatrix) -> Vec<f64> {
    let mut sums = vec![0f64; matrix.n_cols()];
    for row in matrix.rows() {
        for (col, &v) in row.iter().enumerate() {
            sums[col] += v;
        }
    }
    let n = matrix.n_rows() as f64;
    sums.into_iter().map(|s| s / n).collect()
}

pub fn sum_f64(values: &[f64]) -> f64 {
    let mut sum = 0f64;
    for &v in values {
        sum += v;
    }
    sum
}

pub fn max_f64(values: &[f64]) -> f64 {
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v > max {
            max = v;
        }
    }
    max
}

pub fn min_f64(values: &[f64]) -> f64 {
    let mut min = f64::INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
    }
    min
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_stats.rs"]
mod tests;

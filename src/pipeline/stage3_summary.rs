use crate::error::ShapeError;
use crate::model::{ClassSummary, Dataset, Ranking, RowStats};
use crate::pipeline::stage1_stats::{column_means, compute_stats, entity_stats};
use crate::pipeline::stage2_rank::rank;

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub stats: RowStats,
    pub ranking: Ranking,
    pub class: ClassSummary,
    pub column_means: Vec<f64>,
}

pub fn summarize_class(means: &[f64]) -> Option<ClassSummary> {
    if means.is_empty() {
        return None;
    }
    let s = entity_stats(means);
    Some(ClassSummary {
        count: means.len(),
        mean: s.mean,
        max: s.max,
        min: s.min,
        stddev: s.stddev,
    })
}

pub fn analyze(dataset: &Dataset) -> Result<Analysis, ShapeError> {
    let stats = compute_stats(&dataset.matrix);
    let ranking = rank(&dataset.entities, &stats.means)?;
    let class = summarize_class(&stats.means).ok_or(ShapeError::EmptyMatrix)?;
    let column_means = column_means(&dataset.matrix);

    tracing::info!(
        entities = stats.len(),
        categories = dataset.n_categories(),
        class_mean = class.mean,
        "analysis complete"
    );

    Ok(Analysis {
        stats,
        ranking,
        class,
        column_means,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_summary.rs"]
mod tests;

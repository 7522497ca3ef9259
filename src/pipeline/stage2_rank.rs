use crate::error::ShapeError;
use crate::model::{RankedEntity, Ranking};

pub fn rank(labels: &[String], means: &[f64]) -> Result<Ranking, ShapeError> {
    if labels.len() != means.len() {
        return Err(ShapeError::LabelMismatch {
            what: "ranking",
            expected: means.len(),
            found: labels.len(),
        });
    }

    let mut order = (0..means.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| means[a].total_cmp(&means[b]));
    // Equal means end up in reverse input order.
    order.reverse();

    let entries = order
        .into_iter()
        .enumerate()
        .map(|(pos, idx)| RankedEntity {
            rank: pos + 1,
            label: labels[idx].clone(),
            mean: means[idx],
        })
        .collect::<Vec<_>>();
    let ranking = Ranking { entries };
    tracing::debug!(order = ?ranking.labels(), "ranked {} entities", ranking.entries.len());

    Ok(ranking)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_rank.rs"]
mod tests;

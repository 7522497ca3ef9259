use serde::Serialize;

use crate::model::{ClassSummary, Dataset, EntityStats, Ranking};
use crate::pipeline::stage3_summary::Analysis;

#[derive(Debug, Serialize)]
pub struct SummaryJson<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub shape: Shape,
    pub entities: Vec<EntityRecord<'a>>,
    pub categories: Vec<CategoryRecord<'a>>,
    pub ranking: &'a Ranking,
    pub class: &'a ClassSummary,
}

#[derive(Debug, Serialize)]
pub struct Shape {
    pub entities: usize,
    pub categories: usize,
}

#[derive(Debug, Serialize)]
pub struct EntityRecord<'a> {
    pub name: &'a str,
    pub scores: &'a [f64],
    #[serde(flatten)]
    pub stats: EntityStats,
}

#[derive(Debug, Serialize)]
pub struct CategoryRecord<'a> {
    pub name: &'a str,
    pub mean: f64,
}

pub fn build_summary<'a>(dataset: &'a Dataset, analysis: &'a Analysis) -> SummaryJson<'a> {
    let entities = dataset
        .entities
        .iter()
        .enumerate()
        .map(|(row, name)| EntityRecord {
            name,
            scores: dataset.matrix.row(row),
            stats: analysis.stats.entity(row),
        })
        .collect();
    let categories = dataset
        .categories
        .iter()
        .zip(&analysis.column_means)
        .map(|(name, &mean)| CategoryRecord { name, mean })
        .collect();

    SummaryJson {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        shape: Shape {
            entities: dataset.n_entities(),
            categories: dataset.n_categories(),
        },
        entities,
        categories,
        ranking: &analysis.ranking,
        class: &analysis.class,
    }
}

pub fn render_summary_json(dataset: &Dataset, analysis: &Analysis) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(&build_summary(dataset, analysis))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub stddev: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStats {
    pub means: Vec<f64>,
    pub maxes: Vec<f64>,
    pub mins: Vec<f64>,
    pub stddevs: Vec<f64>,
}

impl RowStats {
    pub fn with_capacity(n_rows: usize) -> Self {
        Self {
            means: Vec::with_capacity(n_rows),
            maxes: Vec::with_capacity(n_rows),
            mins: Vec::with_capacity(n_rows),
            stddevs: Vec::with_capacity(n_rows),
        }
    }

    pub fn push(&mut self, stats: EntityStats) {
        self.means.push(stats.mean);
        self.maxes.push(stats.max);
        self.mins.push(stats.min);
        self.stddevs.push(stats.stddev);
    }

    pub fn len(&self) -> usize {
        self.means.len()
    }

    pub fn entity(&self, row: usize) -> EntityStats {
        EntityStats {
            mean: self.means[row],
            max: self.maxes[row],
            min: self.mins[row],
            stddev: self.stddevs[row],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassSummary {
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub stddev: f64,
}

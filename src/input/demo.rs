use crate::error::ShapeError;
use crate::model::{Dataset, ScoreMatrix};

const DEMO_STUDENTS: &[&str] = &["Alice", "Bob", "Charlie", "David", "Eve"];
const DEMO_SUBJECTS: &[&str] = &["Math", "Physics", "Chemistry", "English", "Computer"];
const DEMO_MARKS: &[[f64; 5]] = &[
    [85.0, 78.0, 92.0, 88.0, 90.0],
    [76.0, 82.0, 79.0, 85.0, 88.0],
    [92.0, 95.0, 89.0, 91.0, 94.0],
    [68.0, 72.0, 75.0, 70.0, 73.0],
    [88.0, 85.0, 87.0, 89.0, 86.0],
];

pub fn demo_dataset() -> Result<Dataset, ShapeError> {
    let matrix = ScoreMatrix::from_rows(DEMO_MARKS.iter().map(|r| r.to_vec()).collect())?;
    Dataset::new(
        matrix,
        DEMO_STUDENTS.iter().map(|s| s.to_string()).collect(),
        DEMO_SUBJECTS.iter().map(|s| s.to_string()).collect(),
    )
}

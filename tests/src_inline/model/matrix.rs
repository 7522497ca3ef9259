use super::*;

#[test]
fn test_from_rows_row_major_layout() {
    let m = ScoreMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.n_rows(), 2);
    assert_eq!(m.n_cols(), 3);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    let rows = m.rows().collect::<Vec<_>>();
    assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
}

#[test]
fn test_from_rows_rejects_empty_and_ragged() {
    assert_eq!(
        ScoreMatrix::from_rows(vec![]).unwrap_err(),
        ShapeError::EmptyMatrix
    );
    assert_eq!(
        ScoreMatrix::from_rows(vec![vec![]]).unwrap_err(),
        ShapeError::EmptyRow { row: 0 }
    );
    assert_eq!(
        ScoreMatrix::from_rows(vec![vec![1.0], vec![]]).unwrap_err(),
        ShapeError::EmptyRow { row: 1 }
    );
    assert_eq!(
        ScoreMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err(),
        ShapeError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_from_flat_checks_dimensions() {
    let m = ScoreMatrix::from_flat(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
    assert_eq!(m.row(0), &[1.0, 2.0]);
    assert_eq!(
        ScoreMatrix::from_flat(vec![], 0, 3).unwrap_err(),
        ShapeError::EmptyMatrix
    );
    assert_eq!(
        ScoreMatrix::from_flat(vec![], 2, 0).unwrap_err(),
        ShapeError::EmptyRow { row: 0 }
    );
    assert_eq!(
        ScoreMatrix::from_flat(vec![1.0, 2.0, 3.0], 2, 2).unwrap_err(),
        ShapeError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn test_dataset_label_checks() {
    let m = ScoreMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let cats = vec!["x".to_string(), "y".to_string()];

    let err = Dataset::new(m.clone(), vec!["a".to_string()], cats.clone()).unwrap_err();
    assert_eq!(
        err,
        ShapeError::LabelMismatch {
            what: "entities",
            expected: 2,
            found: 1
        }
    );

    let err = Dataset::new(
        m.clone(),
        vec!["a".to_string(), "b".to_string()],
        vec!["x".to_string()],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ShapeError::LabelMismatch {
            what: "categories",
            ..
        }
    ));

    let err = Dataset::new(m.clone(), vec!["a".to_string(), "a".to_string()], cats.clone())
        .unwrap_err();
    assert_eq!(
        err,
        ShapeError::DuplicateLabel {
            row: 1,
            label: "a".to_string()
        }
    );

    let err = Dataset::new(m.clone(), vec!["a".to_string(), " ".to_string()], cats.clone())
        .unwrap_err();
    assert_eq!(err, ShapeError::EmptyLabel { row: 1 });

    let ok = Dataset::new(m, vec!["a".to_string(), "b".to_string()], cats).unwrap();
    assert_eq!(ok.n_entities(), 2);
    assert_eq!(ok.n_categories(), 2);
}

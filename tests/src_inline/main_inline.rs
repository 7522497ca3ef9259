use super::*;
use crate::error::ShapeError;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_markstats_run_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_execute_demo_writes_report() {
    let dir = make_temp_dir();
    let targets = ReportTargets {
        text: Some(dir.join("student_analysis.txt")),
        json: None,
    };
    let mut prompter = Prompter::new("".as_bytes(), Vec::new());
    let written = execute(&DataSource::Demo, &targets, &mut prompter).unwrap();

    let console = String::from_utf8(prompter.into_writer()).unwrap();
    assert!(console.contains("STUDENT RANKINGS (by Average)"));
    assert_eq!(written, vec![dir.join("student_analysis.txt")]);
    let report = std::fs::read_to_string(dir.join("student_analysis.txt")).unwrap();
    assert!(report.contains("Student: David\n  Average: 71.60\n"));
}

#[test]
fn test_execute_interactive_single_row() {
    let dir = make_temp_dir();
    let targets = ReportTargets {
        text: Some(dir.join("report.txt")),
        json: Some(dir.join("summary.json")),
    };
    let mut prompter = Prompter::new("1\n4\nA\nB\nC\nD\nSolo\n1\n2\n3\n4\n".as_bytes(), Vec::new());
    let written = execute(&DataSource::Interactive, &targets, &mut prompter).unwrap();

    let console = String::from_utf8(prompter.into_writer()).unwrap();
    assert!(console.contains("1       Solo           2.50"));
    let report = std::fs::read_to_string(dir.join("report.txt")).unwrap();
    assert!(report.contains("  Std Dev: 1.12\n"));
    assert_eq!(written.len(), 2);
}

#[test]
fn test_empty_row_fails_without_output() {
    let dir = make_temp_dir();
    let table = dir.join("scores.tsv");
    std::fs::write(&table, "student\tMath\nAnn\n").unwrap();
    let targets = ReportTargets {
        text: Some(dir.join("student_analysis.txt")),
        json: Some(dir.join("summary.json")),
    };
    let mut prompter = Prompter::new("".as_bytes(), Vec::new());
    let err = execute(&DataSource::Table(table), &targets, &mut prompter).unwrap_err();

    assert!(matches!(err, AppError::Shape(ShapeError::EmptyRow { row: 0 })));
    assert!(!dir.join("student_analysis.txt").exists());
    assert!(!dir.join("summary.json").exists());
}

#[test]
fn test_console_printed_before_report_failure() {
    let dir = make_temp_dir();
    let blocker = dir.join("not_a_dir");
    std::fs::write(&blocker, "").unwrap();
    let targets = ReportTargets {
        text: Some(blocker.join("report.txt")),
        json: None,
    };
    let mut prompter = Prompter::new("".as_bytes(), Vec::new());
    let err = execute(&DataSource::Demo, &targets, &mut prompter).unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
    let console = String::from_utf8(prompter.into_writer()).unwrap();
    assert!(console.contains("STUDENT RANKINGS (by Average)"));
    assert!(console.contains("1       Charlie        92.20"));
}

use crate::model::{Dataset, RowStats};
use crate::report::format_f64_2;

pub const REPORT_TITLE: &str = "STUDENT MARKS ANALYSIS RESULTS";

pub fn render_report_text(dataset: &Dataset, stats: &RowStats) -> String {
    let mut out = String::new();

    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for (row, name) in dataset.entities.iter().enumerate() {
        let s = stats.entity(row);
        out.push_str(&format!("Student: {}\n", name));
        out.push_str(&format!("  Average: {}\n", format_f64_2(s.mean)));
        out.push_str(&format!("  Maximum: {}\n", format_f64_2(s.max)));
        out.push_str(&format!("  Minimum: {}\n", format_f64_2(s.min)));
        out.push_str(&format!("  Std Dev: {}\n\n", format_f64_2(s.stddev)));
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

use crate::model::Dataset;
use crate::pipeline::stage3_summary::Analysis;
use crate::report::{NAME_WIDTH, RANK_WIDTH, RULE_WIDTH, VALUE_WIDTH, medal, rule};

pub fn render_console(dataset: &Dataset, analysis: &Analysis) -> String {
    let mut out = String::new();
    let heavy = rule('=');
    let light = rule('-');

    out.push_str(&format!("{heavy}\n"));
    out.push_str(&format!(
        "{:^width$}\n",
        "STUDENT MARKS ANALYSIS SYSTEM",
        width = RULE_WIDTH
    ));
    out.push_str(&format!("{heavy}\n"));

    render_marks(&mut out, dataset, &light);
    render_entity_stats(&mut out, dataset, analysis, &light);
    render_ranking(&mut out, analysis, &light);
    render_class(&mut out, analysis, &light);
    render_columns(&mut out, dataset, analysis, &light);

    out.push_str(&format!("\n{heavy}\n"));
    out
}

fn render_marks(out: &mut String, dataset: &Dataset, light: &str) {
    out.push_str(&format!("\n📚 SUBJECT-WISE MARKS\n{light}\n"));
    out.push_str(&format!("{:<NAME_WIDTH$}", "Student"));
    for category in &dataset.categories {
        out.push_str(&format!("{:<VALUE_WIDTH$}", category));
    }
    out.push_str(&format!("\n{light}\n"));

    for (row, name) in dataset.entities.iter().enumerate() {
        out.push_str(&format!("{:<NAME_WIDTH$}", name));
        for &score in dataset.matrix.row(row) {
            out.push_str(&format!("{:<VALUE_WIDTH$.2}", score));
        }
        out.push('\n');
    }
}

fn render_entity_stats(out: &mut String, dataset: &Dataset, analysis: &Analysis, light: &str) {
    out.push_str(&format!("\n📊 STUDENT-WISE STATISTICS\n{light}\n"));
    out.push_str(&format!(
        "{:<NAME_WIDTH$}{:<VALUE_WIDTH$}{:<VALUE_WIDTH$}{:<VALUE_WIDTH$}{:<VALUE_WIDTH$}\n",
        "Student", "Average", "Maximum", "Minimum", "Std Dev"
    ));
    out.push_str(&format!("{light}\n"));

    for (row, name) in dataset.entities.iter().enumerate() {
        let s = analysis.stats.entity(row);
        out.push_str(&format!(
            "{:<NAME_WIDTH$}{:<VALUE_WIDTH$.2}{:<VALUE_WIDTH$.2}{:<VALUE_WIDTH$.2}{:<VALUE_WIDTH$.2}\n",
            name, s.mean, s.max, s.min, s.stddev
        ));
    }
}

fn render_ranking(out: &mut String, analysis: &Analysis, light: &str) {
    out.push_str(&format!("\n🏆 STUDENT RANKINGS (by Average)\n{light}\n"));
    out.push_str(&format!(
        "{:<RANK_WIDTH$}{:<NAME_WIDTH$}{:<VALUE_WIDTH$}\n",
        "Rank", "Student", "Average"
    ));
    out.push_str(&format!("{light}\n"));

    for entry in &analysis.ranking.entries {
        out.push_str(&format!(
            "{:<RANK_WIDTH$}{:<NAME_WIDTH$}{:<VALUE_WIDTH$.2} {}\n",
            entry.rank,
            entry.label,
            entry.mean,
            medal(entry.rank)
        ));
    }
}

fn render_class(out: &mut String, analysis: &Analysis, light: &str) {
    let class = &analysis.class;
    out.push_str(&format!("\n📈 CLASS STATISTICS\n{light}\n"));
    out.push_str(&format!("Total Students:        {}\n", class.count));
    out.push_str(&format!("Class Average:         {:.2}\n", class.mean));
    out.push_str(&format!("Highest Average:       {:.2}\n", class.max));
    out.push_str(&format!("Lowest Average:        {:.2}\n", class.min));
    out.push_str(&format!("Class Std Deviation:   {:.2}\n", class.stddev));
}

fn render_columns(out: &mut String, dataset: &Dataset, analysis: &Analysis, light: &str) {
    out.push_str(&format!("\n📝 SUBJECT-WISE CLASS AVERAGES\n{light}\n"));
    for (category, mean) in dataset.categories.iter().zip(&analysis.column_means) {
        out.push_str(&format!("{:<NAME_WIDTH$}: {:.2}\n", category, mean));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/console.rs"]
mod tests;

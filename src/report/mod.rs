pub mod console;
pub mod json;
pub mod text;

pub const RULE_WIDTH: usize = 80;
pub const NAME_WIDTH: usize = 15;
pub const VALUE_WIDTH: usize = 12;
pub const RANK_WIDTH: usize = 8;

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn medal(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "  ",
    }
}

pub fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, RULE_WIDTH).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

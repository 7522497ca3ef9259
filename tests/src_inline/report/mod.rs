use super::*;

#[test]
fn test_format_two_decimals() {
    assert_eq!(format_f64_2(86.6), "86.60");
    assert_eq!(format_f64_2(4.882622), "4.88");
    assert_eq!(format_f64_2(0.0), "0.00");
}

#[test]
fn test_medals_only_for_top_three() {
    assert_eq!(medal(1), "🥇");
    assert_eq!(medal(2), "🥈");
    assert_eq!(medal(3), "🥉");
    assert_eq!(medal(4), "  ");
}

#[test]
fn test_rule_width() {
    assert_eq!(rule('=').chars().count(), RULE_WIDTH);
    assert!(rule('-').chars().all(|c| c == '-'));
}

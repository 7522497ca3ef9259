pub mod stage1_stats;
pub mod stage2_rank;
pub mod stage3_summary;
pub mod stage4_report;

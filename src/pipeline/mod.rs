pub mod stage1_load;
pub mod stage2_normalize;
pub mod stage3_report;

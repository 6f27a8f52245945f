pub mod data_table;
pub mod diag_table;

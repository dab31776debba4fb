//! Work Table Adapter - 输入表读取

mod csv_work_table;

pub use csv_work_table::{CsvWorkTable, WorkTableError};

//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod auth;
pub mod console;
pub mod tts;
pub mod work_table;

pub use auth::*;
pub use console::*;
pub use tts::*;
pub use work_table::*;

pub mod analysis_result;
pub mod history_entry;

pub use analysis_result::*;
pub use history_entry::*;

pub mod config;
pub mod constants;
pub mod error;
pub mod history;
pub mod io;
pub mod table;
pub mod translation;

// Re-export commonly used items for convenience
pub use config::{Configuration, FrameCount, PageSize};
pub use constants::{HISTORY_CAPACITY, PAGE_COUNT};
pub use error::ValidationError;
pub use history::HistoryLog;
pub use table::{PageTable, PageTableEntry};
pub use translation::{
    Fault, TranslationResult, parse_logical_address, translate, translate_batch, translate_request,
};

use thiserror::Error;

/// Validation failures detected before any translation arithmetic runs.
///
/// Page faults are not represented here: an out-of-range or not-loaded page
/// is a successfully computed [`crate::translation::TranslationResult`] with
/// `faulted() == true`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Logical address text was missing, non-integer, or negative.
    #[error("logical address must be a non-negative integer")]
    InvalidAddress,

    /// Page size outside the selectable set.
    #[error("page size must be 512 or 1024, got {0}")]
    InvalidPageSize(u32),

    /// Physical frame count outside the selectable range.
    #[error("physical frame count must be between 4 and 6, got {0}")]
    InvalidFrameCount(u32),

    /// A page table cell is non-integer or maps outside
    /// {-1} ∪ [0, frame_count-1]. Reports the first offending page index.
    #[error("page {page} holds an invalid frame mapping (must be -1 or a valid frame number)")]
    InvalidPageTableEntry { page: usize },
}

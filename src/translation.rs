use log::debug;

use crate::config::{Configuration, FrameCount, PageSize};
use crate::error::ValidationError;
use crate::table::{PageTable, PageTableEntry};

/// Why a translation could not produce a physical address.
///
/// Both kinds render as "Page Fault" to the user, but they have different
/// causes and different display fields, so they stay distinct here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The page number lies beyond the logical address space.
    OutOfRange,
    /// The page exists but has no frame assigned (table entry is -1).
    NotLoaded,
}

/// Outcome of a single translation attempt. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub logical_address: u64,
    pub page_number: u64,
    pub offset: u64,
    pub frame_number: Option<u32>,
    pub physical_address: Option<u64>,
    pub fault: Option<Fault>,
    pub explanation: String,
}

impl TranslationResult {
    #[inline]
    pub fn faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Frame column as the output table renders it: "-" for an out-of-range
    /// page, "N/A" for a not-loaded page, the frame number otherwise.
    pub fn frame_field(&self) -> String {
        match (self.frame_number, self.fault) {
            (Some(frame), _) => frame.to_string(),
            (None, Some(Fault::OutOfRange)) => "-".to_string(),
            (None, _) => "N/A".to_string(),
        }
    }

    /// Physical address column, with the same unavailable markers as
    /// [`frame_field`](Self::frame_field).
    pub fn physical_field(&self) -> String {
        match (self.physical_address, self.fault) {
            (Some(physical), _) => physical.to_string(),
            (None, Some(Fault::OutOfRange)) => "-".to_string(),
            (None, _) => "N/A".to_string(),
        }
    }

    pub fn fault_field(&self) -> &'static str {
        if self.faulted() { "YES" } else { "NO" }
    }
}

/// Translate a logical address against a validated configuration and page
/// table.
///
/// Pure and stateless: identical inputs always produce identical results,
/// and nothing is carried over between calls. Faults are successful results
/// with `faulted() == true`, never errors.
pub fn translate(config: &Configuration, table: &PageTable, logical: u64) -> TranslationResult {
    let page_size = u64::from(config.page_size.bytes());
    let page_number = logical / page_size;
    let offset = logical % page_size;

    if page_number >= table.len() as u64 {
        debug!("translate: logical={logical} page={page_number} -> out-of-range fault");
        let explanation = format!(
            "Page number {page_number} is outside the logical address space (max {}). \
             Treated as Page Fault.\n\nPage size: {page_size} bytes. Page table length: {}. \
             Frames available: {}.",
            table.len() - 1,
            table.len(),
            config.frame_count.get()
        );
        return TranslationResult {
            logical_address: logical,
            page_number,
            offset,
            frame_number: None,
            physical_address: None,
            fault: Some(Fault::OutOfRange),
            explanation,
        };
    }

    // In-bounds page number, entry() cannot miss
    match table.entry(page_number as usize) {
        Some(PageTableEntry::Mapped(frame)) => {
            let physical = u64::from(frame) * page_size + offset;
            debug!(
                "translate: logical={logical} page={page_number} frame={frame} -> physical={physical}"
            );
            let explanation = format!(
                "Translation successful:\nLogical addr {logical} -> page {page_number}, \
                 offset {offset}.\nPage {page_number} maps to frame {frame} -> physical address \
                 = frame*pagesize + offset = {frame}*{page_size} + {offset} = {physical}."
            );
            TranslationResult {
                logical_address: logical,
                page_number,
                offset,
                frame_number: Some(frame),
                physical_address: Some(physical),
                fault: None,
                explanation,
            }
        }
        _ => {
            debug!("translate: logical={logical} page={page_number} -> not-loaded fault");
            let explanation = format!(
                "Page Fault: page {page_number} is not loaded (page table entry = -1).\n\
                 Requested logical address {logical} -> page {page_number}, offset {offset}.\n\
                 No replacement/load simulated. To load the page, set a frame number (0..{}) \
                 in the page table.",
                config.frame_count.max_frame()
            );
            TranslationResult {
                logical_address: logical,
                page_number,
                offset,
                frame_number: None,
                physical_address: None,
                fault: Some(Fault::NotLoaded),
                explanation,
            }
        }
    }
}

/// Translate a batch of logical addresses against one setup.
pub fn translate_batch(
    config: &Configuration,
    table: &PageTable,
    addresses: &[u64],
) -> Vec<TranslationResult> {
    addresses
        .iter()
        .map(|&logical| translate(config, table, logical))
        .collect()
}

/// Parse the logical address text: must be a non-negative integer.
pub fn parse_logical_address(text: &str) -> Result<u64, ValidationError> {
    text.trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidAddress)
}

/// Translate from raw text inputs, the way the presentation layer supplies
/// them.
///
/// Validation is fail-fast, first violation wins, in this order: logical
/// address, page size, frame count, then the page table cells in ascending
/// page order. Only fully validated inputs reach the arithmetic; a
/// validation error means no [`TranslationResult`] was produced at all.
pub fn translate_request(
    page_size: u32,
    frame_count: u32,
    cells: &[&str],
    address: &str,
) -> Result<TranslationResult, ValidationError> {
    let logical = parse_logical_address(address)?;
    let page_size = PageSize::new(page_size)?;
    let frame_count = FrameCount::new(frame_count)?;
    let table = PageTable::parse(cells, frame_count)?;
    let config = Configuration {
        page_size,
        frame_count,
    };
    Ok(translate(&config, &table, logical))
}

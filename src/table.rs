use crate::config::FrameCount;
use crate::constants::*;
use crate::error::ValidationError;

/// One page table slot: either resident in a physical frame or not loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTableEntry {
    NotLoaded,
    Mapped(u32),
}

impl PageTableEntry {
    /// Frame number if the page is resident.
    #[inline]
    pub fn frame(self) -> Option<u32> {
        match self {
            PageTableEntry::Mapped(frame) => Some(frame),
            PageTableEntry::NotLoaded => None,
        }
    }
}

/// Fixed-length page table: index == page number.
///
/// The table is owned by the caller and treated as an immutable input per
/// translation call; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTable {
    entries: [PageTableEntry; PAGE_COUNT],
}

impl PageTable {
    /// Build from raw mappings, validating each against
    /// {-1} ∪ [0, frame_count-1]. The first invalid index (ascending scan)
    /// is the one reported.
    pub fn from_mappings(
        mappings: &[i32; PAGE_COUNT],
        frame_count: FrameCount,
    ) -> Result<Self, ValidationError> {
        let mut entries = [PageTableEntry::NotLoaded; PAGE_COUNT];
        for (page, &mapping) in mappings.iter().enumerate() {
            entries[page] = Self::check_mapping(i64::from(mapping), page, frame_count)?;
        }
        Ok(PageTable { entries })
    }

    /// Build from the text cells of a table editor, one cell per page.
    ///
    /// Cells are trimmed; an empty cell means not loaded, same as `-1`.
    /// Missing trailing cells are treated as empty. Non-integer text or an
    /// out-of-set mapping reports the first offending page index.
    pub fn parse(cells: &[&str], frame_count: FrameCount) -> Result<Self, ValidationError> {
        let mut entries = [PageTableEntry::NotLoaded; PAGE_COUNT];
        for (page, slot) in entries.iter_mut().enumerate() {
            let text = cells.get(page).map_or("", |cell| cell.trim());
            if text.is_empty() {
                continue;
            }
            let value: i64 = text
                .parse()
                .map_err(|_| ValidationError::InvalidPageTableEntry { page })?;
            *slot = Self::check_mapping(value, page, frame_count)?;
        }
        Ok(PageTable { entries })
    }

    fn check_mapping(
        value: i64,
        page: usize,
        frame_count: FrameCount,
    ) -> Result<PageTableEntry, ValidationError> {
        if value == i64::from(NOT_LOADED) {
            Ok(PageTableEntry::NotLoaded)
        } else if value >= 0 && value <= i64::from(frame_count.max_frame()) {
            Ok(PageTableEntry::Mapped(value as u32))
        } else {
            Err(ValidationError::InvalidPageTableEntry { page })
        }
    }

    /// The default mapping the simulator starts with: pages 0, 1, 3 and 4
    /// resident, the rest not loaded. Valid for any selectable frame count.
    pub fn sample() -> Self {
        let mut entries = [PageTableEntry::NotLoaded; PAGE_COUNT];
        for (page, &mapping) in SAMPLE_MAPPINGS.iter().enumerate() {
            if mapping >= 0 {
                entries[page] = PageTableEntry::Mapped(mapping as u32);
            }
        }
        PageTable { entries }
    }

    #[inline]
    pub fn entry(&self, page: usize) -> Option<PageTableEntry> {
        self.entries.get(page).copied()
    }

    /// Number of pages in the logical address space. Always [`PAGE_COUNT`].
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = PageTableEntry> + '_ {
        self.entries.iter().copied()
    }
}

impl Default for PageTable {
    /// An empty table: every page not loaded.
    fn default() -> Self {
        PageTable {
            entries: [PageTableEntry::NotLoaded; PAGE_COUNT],
        }
    }
}

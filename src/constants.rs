pub const PAGE_COUNT: usize = 8;

pub const PAGE_SIZES: [u32; 2] = [512, 1024];

pub const MIN_FRAMES: u32 = 4;
pub const MAX_FRAMES: u32 = 6;

pub const HISTORY_CAPACITY: usize = 100;

pub const NOT_LOADED: i32 = -1;

pub const DEFAULT_PAGE_SIZE: u32 = 1024;
pub const DEFAULT_FRAME_COUNT: u32 = 4;

pub const SAMPLE_MAPPINGS: [i32; PAGE_COUNT] = [0, 1, -1, 3, 2, -1, -1, -1];

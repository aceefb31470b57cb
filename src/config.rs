use crate::constants::*;
use crate::error::ValidationError;

/// Bytes per page (and per frame). Only two sizes are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Bytes512,
    Bytes1024,
}

impl PageSize {
    /// Validate a raw byte count against the allowed set.
    pub fn new(bytes: u32) -> Result<Self, ValidationError> {
        match bytes {
            512 => Ok(PageSize::Bytes512),
            1024 => Ok(PageSize::Bytes1024),
            other => Err(ValidationError::InvalidPageSize(other)),
        }
    }

    #[inline]
    pub fn bytes(self) -> u32 {
        match self {
            PageSize::Bytes512 => 512,
            PageSize::Bytes1024 => 1024,
        }
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

/// Number of physical frames, restricted to [MIN_FRAMES, MAX_FRAMES].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCount(u32);

impl FrameCount {
    pub fn new(count: u32) -> Result<Self, ValidationError> {
        if (MIN_FRAMES..=MAX_FRAMES).contains(&count) {
            Ok(FrameCount(count))
        } else {
            Err(ValidationError::InvalidFrameCount(count))
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Highest frame number a page may map to.
    #[inline]
    pub fn max_frame(self) -> u32 {
        self.0 - 1
    }
}

/// The caller-owned knobs of the simulation, valid by construction.
///
/// The engine never mutates a `Configuration`; callers may swap in a new one
/// between calls without any reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration {
    pub page_size: PageSize,
    pub frame_count: FrameCount,
}

impl Configuration {
    pub fn new(page_size: u32, frame_count: u32) -> Result<Self, ValidationError> {
        Ok(Configuration {
            page_size: PageSize::new(page_size)?,
            frame_count: FrameCount::new(frame_count)?,
        })
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            page_size: PageSize::Bytes1024,
            frame_count: FrameCount(DEFAULT_FRAME_COUNT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_allowed_values() {
        assert_eq!(PageSize::new(512), Ok(PageSize::Bytes512));
        assert_eq!(PageSize::new(1024), Ok(PageSize::Bytes1024));
    }

    #[test]
    fn test_page_size_rejects_everything_else() {
        for bad in [0, 1, 256, 511, 513, 1023, 1025, 2048, 4096] {
            assert_eq!(PageSize::new(bad), Err(ValidationError::InvalidPageSize(bad)));
        }
    }

    #[test]
    fn test_page_sizes_constant_matches_enum() {
        for &bytes in &PAGE_SIZES {
            assert_eq!(PageSize::new(bytes).unwrap().bytes(), bytes);
        }
    }

    #[test]
    fn test_page_size_bytes() {
        assert_eq!(PageSize::Bytes512.bytes(), 512);
        assert_eq!(PageSize::Bytes1024.bytes(), 1024);
    }

    #[test]
    fn test_frame_count_bounds() {
        assert!(FrameCount::new(3).is_err());
        assert!(FrameCount::new(7).is_err());
        for ok in MIN_FRAMES..=MAX_FRAMES {
            assert_eq!(FrameCount::new(ok).unwrap().get(), ok);
        }
    }

    #[test]
    fn test_frame_count_max_frame() {
        // frameCount=4 means legal frames are 0..=3
        assert_eq!(FrameCount::new(4).unwrap().max_frame(), 3);
        assert_eq!(FrameCount::new(6).unwrap().max_frame(), 5);
    }

    #[test]
    fn test_configuration_defaults_match_sample_setup() {
        let config = Configuration::default();
        assert_eq!(config.page_size.bytes(), DEFAULT_PAGE_SIZE);
        assert_eq!(config.frame_count.get(), DEFAULT_FRAME_COUNT);
    }

    #[test]
    fn test_configuration_new_validates_both_fields() {
        assert!(Configuration::new(1024, 4).is_ok());
        assert_eq!(
            Configuration::new(768, 4),
            Err(ValidationError::InvalidPageSize(768))
        );
        assert_eq!(
            Configuration::new(1024, 9),
            Err(ValidationError::InvalidFrameCount(9))
        );
    }
}

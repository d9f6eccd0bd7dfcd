use crate::core::data::point::Point;
use crate::core::data::tile_key::TileKey;
use std::time::Duration;

/// Timing overlay entry for one drawn tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileTiming {
    pub key: TileKey,
    pub draw: Point,
    pub generation_time: Duration,
}

/// What happened during one call to the frame renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameReport {
    pub tiles_drawn: usize,
    pub tiles_expected: usize,
    pub tiles_generated: usize,
    /// The frame's generation budget was used up, so some visible tile was
    /// either skipped or generated on the last permitted slot.
    pub throttled: bool,
    pub frame_time: Duration,
    /// Only filled while generation times are shown.
    pub tile_timings: Vec<TileTiming>,
}

impl FrameReport {
    /// Whole percent of visible tiles drawn, rounded down.
    #[must_use]
    pub fn percent_rendered(&self) -> u32 {
        if self.tiles_expected == 0 {
            return 100;
        }

        (self.tiles_drawn * 100 / self.tiles_expected) as u32
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.tiles_drawn == self.tiles_expected
    }
}

/// Inclusive bounds on the zoom level.
///
/// The lower bound caps zoom-in depth before `f64` precision runs out; the
/// upper bound caps zoom-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLimits {
    pub min_level: i32,
    pub max_level: i32,
}

impl ZoomLimits {
    #[must_use]
    pub fn contains(&self, level: i32) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_level: -42,
            max_level: 3,
        }
    }
}

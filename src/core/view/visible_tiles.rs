use crate::core::data::point::Point;

/// Where one visible tile goes on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlacement {
    pub tile_x: i64,
    pub tile_y: i64,
    /// Top-left corner of the tile on the display surface.
    pub draw: Point,
}

/// The tiles covering the viewport for one frame, center tile first.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleTiles {
    pub scale_exponent: i32,
    pub center_tile: (i64, i64),
    pub placements: Vec<TilePlacement>,
}

impl VisibleTiles {
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Tile offsets from the center tile, one quadrant at a time with the other
/// three produced by sign flips. A zero offset is emitted once.
pub(crate) fn mirrored_offsets(reach_x: i64, reach_y: i64) -> impl Iterator<Item = (i64, i64)> {
    (0..reach_x).flat_map(move |tile_x| {
        (0..reach_y).flat_map(move |tile_y| {
            [(-1, -1), (-1, 1), (1, -1), (1, 1)]
                .into_iter()
                .filter(move |&(x_sign, y_sign)| {
                    (tile_x != 0 || x_sign < 0) && (tile_y != 0 || y_sign < 0)
                })
                .map(move |(x_sign, y_sign)| (tile_x * x_sign, tile_y * y_sign))
        })
    })
}

/// Number of tile offsets per quadrant needed along one axis.
pub(crate) fn quadrant_reach(extent: u32, tile_size: u32) -> i64 {
    let half_tiles = f64::from(extent) / f64::from(tile_size) / 2.0;

    (half_tiles + 2.0).ceil() as i64
}

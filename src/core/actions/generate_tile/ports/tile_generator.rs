use crate::core::data::tile::Tile;
use crate::core::data::tile_key::TileKey;

/// Produces the pixels for a tile on a cache miss.
///
/// Generation must depend only on the key and the generator's own settings,
/// so tiles for distinct keys can be produced independently.
pub trait TileGenerator: Sync {
    fn generate(&self, key: &TileKey) -> Tile;
}

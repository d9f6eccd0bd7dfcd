use crate::core::actions::generate_tile::ports::tile_generator::TileGenerator;
use crate::core::cache::cache_stats::CacheStats;
use crate::core::data::tile::Tile;
use crate::core::data::tile_key::TileKey;
use crate::core::fractals::fractal_mode::FractalMode;
use fnv::{FnvHashMap, FnvHashSet};
use log::debug;
use rayon::prelude::*;
use std::sync::Arc;

pub const DEFAULT_MAX_TILES_PER_FRAME: usize = 4;

/// Memoized tiles with a cap on how many may be generated per frame.
///
/// Entries are never evicted implicitly: a new scale or iteration cap only
/// changes which keys are asked for, and the old entries stay resident.
/// Only [`TileCache::evict_where`] removes tiles.
#[derive(Debug)]
pub struct TileCache {
    tiles: FnvHashMap<TileKey, Arc<Tile>>,
    max_tiles_per_frame: usize,
    generated_this_frame: usize,
    stats: CacheStats,
}

impl TileCache {
    #[must_use]
    pub fn new(max_tiles_per_frame: usize) -> Self {
        Self {
            tiles: FnvHashMap::default(),
            max_tiles_per_frame,
            generated_this_frame: 0,
            stats: CacheStats::default(),
        }
    }

    /// Restores the full generation budget.
    pub fn begin_frame(&mut self) {
        self.generated_this_frame = 0;
    }

    #[must_use]
    pub fn max_tiles_per_frame(&self) -> usize {
        self.max_tiles_per_frame
    }

    #[must_use]
    pub fn generated_this_frame(&self) -> usize {
        self.generated_this_frame
    }

    #[must_use]
    pub fn remaining_budget(&self) -> usize {
        self.max_tiles_per_frame
            .saturating_sub(self.generated_this_frame)
    }

    #[must_use]
    pub fn budget_exhausted(&self) -> bool {
        self.remaining_budget() == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &TileKey) -> bool {
        self.tiles.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &TileKey) -> Option<Arc<Tile>> {
        self.tiles.get(key).cloned()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Returns the cached tile, generating it if budget remains.
    ///
    /// `None` means the tile is not ready this frame; ask again next frame.
    pub fn get_or_generate<G>(&mut self, key: &TileKey, generator: &G) -> Option<Arc<Tile>>
    where
        G: TileGenerator + ?Sized,
    {
        if let Some(tile) = self.tiles.get(key) {
            self.stats.hits += 1;
            return Some(Arc::clone(tile));
        }

        if self.budget_exhausted() {
            self.stats.deferred += 1;
            return None;
        }

        let tile = Arc::new(generator.generate(key));
        self.publish(Arc::clone(&tile));

        Some(tile)
    }

    /// Batch form of [`TileCache::get_or_generate`] that generates the
    /// frame's misses in parallel.
    ///
    /// Misses are admitted in request order until the budget runs out; each
    /// distinct key is generated at most once. Results line up with `keys`.
    pub fn get_or_generate_batch<G>(
        &mut self,
        keys: &[TileKey],
        generator: &G,
    ) -> Vec<Option<Arc<Tile>>>
    where
        G: TileGenerator + ?Sized,
    {
        let mut admitted: FnvHashSet<TileKey> = FnvHashSet::default();
        let mut pending: Vec<TileKey> = Vec::new();
        let budget = self.remaining_budget();

        for key in keys {
            if self.tiles.contains_key(key) || admitted.contains(key) {
                self.stats.hits += 1;
            } else if pending.len() < budget {
                admitted.insert(*key);
                pending.push(*key);
            } else {
                self.stats.deferred += 1;
            }
        }

        let generated: Vec<Tile> = pending
            .par_iter()
            .map(|key| generator.generate(key))
            .collect();

        for tile in generated {
            self.publish(Arc::new(tile));
        }

        keys.iter().map(|key| self.get(key)).collect()
    }

    /// Removes every tile whose key matches `predicate`.
    pub fn evict_where<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&TileKey) -> bool,
    {
        let before = self.tiles.len();
        self.tiles.retain(|key, _| !predicate(key));
        let evicted = before - self.tiles.len();

        self.stats.evicted += evicted as u64;
        evicted
    }

    pub fn evict_mode(&mut self, mode: FractalMode) -> usize {
        let evicted = self.evict_where(|key| key.mode == mode);

        debug!("evicted {} {} tiles", evicted, mode.display_name());
        evicted
    }

    fn publish(&mut self, tile: Arc<Tile>) {
        self.tiles.insert(*tile.key(), tile);
        self.generated_this_frame += 1;
        self.stats.generated += 1;
    }
}

impl Default for TileCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TILES_PER_FRAME)
    }
}

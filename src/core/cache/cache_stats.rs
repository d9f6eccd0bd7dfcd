/// Running counters over the lifetime of a [`TileCache`](super::tile_cache::TileCache).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Requests answered from the cache.
    pub hits: u64,
    /// Tiles generated on a miss.
    pub generated: u64,
    /// Misses turned away because the frame budget was spent.
    pub deferred: u64,
    /// Tiles removed by invalidation.
    pub evicted: u64,
}

impl CacheStats {
    /// Every lookup, whether answered, generated or deferred.
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.hits + self.generated + self.deferred
    }
}

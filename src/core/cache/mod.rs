pub mod cache_stats;
pub mod tile_cache;

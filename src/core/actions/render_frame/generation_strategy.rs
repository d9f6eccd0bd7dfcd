/// How a frame's missing tiles are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStrategy {
    /// One tile at a time, in visiting order.
    #[default]
    Sequential,
    /// All admitted misses of a frame at once on the rayon pool.
    Parallel,
}

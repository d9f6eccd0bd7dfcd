use crate::core::data::colour::Colour;

/// Maps a continuous escape value to a display colour.
///
/// `max_iterations` is the cap the value was computed under.
pub trait ColourMap: Send + Sync {
    fn map(&self, raw_iter: f64, max_iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}

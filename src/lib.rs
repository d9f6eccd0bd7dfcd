mod adapters;
mod controllers;
mod core;
mod presenters;

pub use controllers::cli::tour::{CliTourController, DEFAULT_TOUR, MAX_SETTLE_FRAMES};
pub use controllers::explorer::commands::ExplorerCommand;
pub use controllers::explorer::controller::ExplorerController;
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use presenters::canvas::canvas::Canvas;
pub use presenters::file::ppm::PpmFilePresenter;

pub use crate::core::actions::generate_tile::generate_tile::FractalTileGenerator;
pub use crate::core::actions::generate_tile::ports::tile_generator::TileGenerator;
pub use crate::core::actions::render_frame::frame_renderer::FrameRenderer;
pub use crate::core::actions::render_frame::frame_report::{FrameReport, TileTiming};
pub use crate::core::actions::render_frame::generation_strategy::GenerationStrategy;
pub use crate::core::actions::render_frame::ports::display::DisplayPort;
pub use crate::core::cache::cache_stats::CacheStats;
pub use crate::core::cache::tile_cache::TileCache;
pub use crate::core::colour_mapping::ports::colour_map::ColourMap;
pub use crate::core::colour_mapping::triangle_wave::TriangleWaveColourMap;
pub use crate::core::config::{ConfigError, ExplorerConfig};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::tile::Tile;
pub use crate::core::data::tile_key::TileKey;
pub use crate::core::data::view_state::ViewState;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::escape::{EscapeRecord, compute_escape};
pub use crate::core::fractals::fractal_mode::FractalMode;
pub use crate::core::fractals::params::{FractalParameters, FractalParamsError};
pub use crate::core::session::explorer_session::ExplorerSession;
pub use crate::core::util::tile_pixel_to_complex::{TilePixelMapping, TilePixelToComplexError};
pub use crate::core::view::view_transform::{ViewTransform, ViewTransformError};
pub use crate::core::view::visible_tiles::{TilePlacement, VisibleTiles};
pub use crate::core::view::zoom_limits::ZoomLimits;

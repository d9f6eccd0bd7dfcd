use crate::core::actions::generate_tile::generate_tile::FractalTileGenerator;
use crate::core::cache::tile_cache::TileCache;
use crate::core::config::{ConfigError, ExplorerConfig};
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::tile_key::TileKey;
use crate::core::fractals::fractal_mode::FractalMode;
use crate::core::fractals::params::{FractalParameters, FractalParamsError};
use crate::core::view::view_transform::ViewTransform;
use crate::core::view::visible_tiles::TilePlacement;
use log::debug;

/// All mutable state of one exploration session.
///
/// Every interaction goes through a method here; the frame renderer reads
/// the result once per frame.
#[derive(Debug)]
pub struct ExplorerSession {
    view: ViewTransform,
    mode: FractalMode,
    params: FractalParameters,
    cache: TileCache,
    cursor: Point,
    drag_anchor: Option<Complex>,
    show_generation_times: bool,
}

impl ExplorerSession {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let view = config.view_transform()?;
        let viewport = view.viewport();

        Ok(Self {
            view,
            mode: config.mode,
            params: config.fractal,
            cache: TileCache::new(config.max_tiles_per_frame),
            cursor: Point {
                x: (viewport.width / 2) as i32,
                y: (viewport.height / 2) as i32,
            },
            drag_anchor: None,
            show_generation_times: false,
        })
    }

    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    #[must_use]
    pub fn mode(&self) -> FractalMode {
        self.mode
    }

    #[must_use]
    pub fn params(&self) -> &FractalParameters {
        &self.params
    }

    #[must_use]
    pub fn cache(&self) -> &TileCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut TileCache {
        &mut self.cache
    }

    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Complex coordinate under the cursor.
    #[must_use]
    pub fn cursor_complex(&self) -> Complex {
        self.view.screen_to_complex(self.cursor)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    #[must_use]
    pub fn show_generation_times(&self) -> bool {
        self.show_generation_times
    }

    /// Tracks the cursor; while dragging, re-centers so the anchored point
    /// stays under it.
    pub fn move_cursor(&mut self, cursor: Point) {
        self.cursor = cursor;

        if let Some(anchor) = self.drag_anchor {
            let target = anchor - self.view.screen_offset(cursor);
            self.view.pan(target - self.view.state().center);
        }
    }

    pub fn begin_drag(&mut self) {
        if self.drag_anchor.is_none() {
            self.drag_anchor = Some(self.cursor_complex());
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn pan(&mut self, delta: Complex) {
        self.view.pan(delta);
    }

    /// Zooms in around the cursor. `false` at the zoom limit.
    pub fn zoom_in(&mut self) -> bool {
        self.view.zoom_in(self.cursor)
    }

    /// Zooms out around the cursor. `false` at the zoom limit.
    pub fn zoom_out(&mut self) -> bool {
        self.view.zoom_out(self.cursor)
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Switching modes keeps every cached tile; keys carry the mode.
    pub fn set_mode(&mut self, mode: FractalMode) {
        self.mode = mode;
    }

    pub fn toggle_max_iterations(&mut self) -> u32 {
        self.params.toggle_max_iterations()
    }

    /// Sets the Julia focus, evicting cached Julia tiles if it moved.
    ///
    /// Returns the number of evicted tiles.
    pub fn set_julia_focus(&mut self, focus: Complex) -> Result<usize, FractalParamsError> {
        if !self.params.set_julia_focus(focus)? {
            return Ok(0);
        }

        debug!("julia focus moved to {} + {}i", focus.real, focus.imag);

        Ok(self.cache.evict_mode(FractalMode::Julia))
    }

    pub fn set_julia_focus_at_cursor(&mut self) -> Result<usize, FractalParamsError> {
        self.set_julia_focus(self.cursor_complex())
    }

    pub fn toggle_generation_times(&mut self) -> bool {
        self.show_generation_times = !self.show_generation_times;
        self.show_generation_times
    }

    /// Cache key for a visible tile under the current mode and parameters.
    #[must_use]
    pub fn tile_key(&self, placement: &TilePlacement, scale_exponent: i32) -> TileKey {
        TileKey {
            mode: self.mode,
            tile_x: placement.tile_x,
            tile_y: placement.tile_y,
            scale_exponent,
            max_iterations: self.params.max_iterations(),
        }
    }

    /// Generator matching the current parameters and tile size.
    #[must_use]
    pub fn generator(&self) -> FractalTileGenerator {
        FractalTileGenerator::new(self.params, self.view.tile_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;

    fn session() -> ExplorerSession {
        let config = ExplorerConfig {
            viewport: Viewport::new(640, 480),
            ..ExplorerConfig::default()
        };

        ExplorerSession::new(&config).unwrap()
    }

    fn fill_cache(session: &mut ExplorerSession, mode: FractalMode, count: i64) {
        session.set_mode(mode);
        let generator = session.generator();
        let scale_exponent = session.view().scale_exponent();

        for tile_x in 0..count {
            let placement = TilePlacement {
                tile_x,
                tile_y: 0,
                draw: Point::default(),
            };
            let key = session.tile_key(&placement, scale_exponent);
            session.cache_mut().begin_frame();
            session.cache_mut().get_or_generate(&key, &generator);
        }
    }

    fn keys_for(session: &ExplorerSession, mode: FractalMode, count: i64) -> Vec<TileKey> {
        let scale_exponent = session.view().scale_exponent();

        (0..count)
            .map(|tile_x| TileKey {
                mode,
                tile_x,
                tile_y: 0,
                scale_exponent,
                max_iterations: session.params().max_iterations(),
            })
            .collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ExplorerConfig {
            max_tiles_per_frame: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            ExplorerSession::new(&config).unwrap_err(),
            ConfigError::ZeroTileBudget
        );
    }

    #[test]
    fn test_cursor_starts_at_view_center() {
        let session = session();

        assert_eq!(session.cursor(), Point { x: 320, y: 240 });
        assert_eq!(session.cursor_complex(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_drag_keeps_anchor_under_cursor() {
        let mut session = session();
        session.move_cursor(Point { x: 100, y: 100 });
        let anchor = session.cursor_complex();

        session.begin_drag();
        session.move_cursor(Point { x: 250, y: 40 });
        session.move_cursor(Point { x: 300, y: 300 });

        let under_cursor = session.cursor_complex();
        assert!((under_cursor.real - anchor.real).abs() < 1e-12);
        assert!((under_cursor.imag - anchor.imag).abs() < 1e-12);

        session.end_drag();
        let center = session.view().state().center;
        session.move_cursor(Point { x: 0, y: 0 });
        assert_eq!(session.view().state().center, center);
    }

    #[test]
    fn test_zoom_uses_cursor() {
        let mut session = session();
        session.move_cursor(Point { x: 500, y: 100 });
        let before = session.cursor_complex();

        assert!(session.zoom_in());

        let after = session.cursor_complex();
        assert!((after.real - before.real).abs() < 1e-12);
        assert!((after.imag - before.imag).abs() < 1e-12);
    }

    #[test]
    fn test_switching_mode_keeps_cached_tiles() {
        let mut session = session();
        fill_cache(&mut session, FractalMode::Mandelbrot, 3);

        session.set_mode(FractalMode::Julia);

        for key in keys_for(&session, FractalMode::Mandelbrot, 3) {
            assert!(session.cache().contains(&key));
        }
    }

    #[test]
    fn test_new_julia_focus_evicts_only_julia_tiles() {
        let mut session = session();
        fill_cache(&mut session, FractalMode::Mandelbrot, 2);
        fill_cache(&mut session, FractalMode::Julia, 3);
        fill_cache(&mut session, FractalMode::BurningShip, 1);

        let julia = keys_for(&session, FractalMode::Julia, 3);
        assert!(julia.iter().all(|k| session.cache().contains(k)));

        let evicted = session.set_julia_focus(Complex::new(-0.7, 0.27)).unwrap();

        assert_eq!(evicted, 3);
        assert!(julia.iter().all(|k| !session.cache().contains(k)));
        for key in keys_for(&session, FractalMode::Mandelbrot, 2)
            .into_iter()
            .chain(keys_for(&session, FractalMode::BurningShip, 1))
        {
            assert!(session.cache().contains(&key));
        }
    }

    #[test]
    fn test_same_julia_focus_evicts_nothing() {
        let mut session = session();
        session.set_julia_focus(Complex::new(0.3, 0.5)).unwrap();
        fill_cache(&mut session, FractalMode::Julia, 2);

        let evicted = session.set_julia_focus(Complex::new(0.3, 0.5)).unwrap();

        assert_eq!(evicted, 0);
        assert_eq!(session.cache().len(), 2);
    }

    #[test]
    fn test_julia_focus_at_cursor() {
        let mut session = session();
        session.move_cursor(Point { x: 320 + 48, y: 240 });

        session.set_julia_focus_at_cursor().unwrap();

        // 48 / 480 * 2 = 0.2 to the right of -0.5
        let focus = session.params().julia_focus();
        assert!((focus.real - -0.3).abs() < 1e-12);
        assert_eq!(focus.imag, 0.0);
    }

    #[test]
    fn test_toggle_max_iterations_changes_keys() {
        let mut session = session();
        let placement = TilePlacement {
            tile_x: 0,
            tile_y: 0,
            draw: Point::default(),
        };
        let before = session.tile_key(&placement, -2);

        assert_eq!(session.toggle_max_iterations(), 128);

        let after = session.tile_key(&placement, -2);
        assert_ne!(before, after);
        assert_eq!(after.max_iterations, 128);
    }

    #[test]
    fn test_reset_view_restores_home() {
        let mut session = session();
        let home = session.view().state();

        session.pan(Complex::new(0.4, 0.1));
        session.zoom_out();
        session.reset_view();

        assert_eq!(session.view().state(), home);
    }

    #[test]
    fn test_toggle_generation_times() {
        let mut session = session();

        assert!(!session.show_generation_times());
        assert!(session.toggle_generation_times());
        assert!(!session.toggle_generation_times());
    }
}

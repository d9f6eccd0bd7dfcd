use crate::core::actions::render_frame::frame_report::{FrameReport, TileTiming};
use crate::core::actions::render_frame::generation_strategy::GenerationStrategy;
use crate::core::actions::render_frame::ports::display::DisplayPort;
use crate::core::config::{ConfigError, ExplorerConfig};
use crate::core::data::tile::Tile;
use crate::core::data::tile_key::TileKey;
use crate::core::session::explorer_session::ExplorerSession;
use crate::core::view::visible_tiles::TilePlacement;
use log::trace;
use std::sync::Arc;
use std::time::Instant;

/// Draws every visible tile that is cached or fits in this frame's
/// generation budget. Missing tiles show up on later frames.
#[derive(Debug)]
pub struct FrameRenderer {
    session: ExplorerSession,
    strategy: GenerationStrategy,
}

impl FrameRenderer {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            session: ExplorerSession::new(config)?,
            strategy: config.generation,
        })
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ExplorerSession {
        &mut self.session
    }

    #[must_use]
    pub fn strategy(&self) -> GenerationStrategy {
        self.strategy
    }

    pub fn render_frame<D>(&mut self, display: &mut D) -> FrameReport
    where
        D: DisplayPort + ?Sized,
    {
        let start = Instant::now();

        display.begin_frame();
        self.session.cache_mut().begin_frame();

        let visible = self.session.view().visible_tiles();
        let keys: Vec<TileKey> = visible
            .placements
            .iter()
            .map(|placement| self.session.tile_key(placement, visible.scale_exponent))
            .collect();

        let tiles = self.fetch_tiles(&keys);
        let budget_spent = self.session.cache().budget_exhausted();

        let show_times = self.session.show_generation_times();
        let mut report = FrameReport {
            tiles_expected: visible.len(),
            throttled: budget_spent,
            ..FrameReport::default()
        };

        for (placement, tile) in visible.placements.iter().zip(tiles) {
            let Some(tile) = tile else {
                report.throttled = true;
                continue;
            };

            draw(display, placement, &tile);
            report.tiles_drawn += 1;

            if show_times {
                report.tile_timings.push(TileTiming {
                    key: *tile.key(),
                    draw: placement.draw,
                    generation_time: tile.generation_time(),
                });
            }
        }

        report.tiles_generated = self.session.cache().generated_this_frame();
        report.frame_time = start.elapsed();

        if report.throttled {
            trace!(
                "frame throttled: {}/{} tiles drawn",
                report.tiles_drawn,
                report.tiles_expected
            );
        }

        report
    }

    fn fetch_tiles(&mut self, keys: &[TileKey]) -> Vec<Option<Arc<Tile>>> {
        let generator = self.session.generator();
        let cache = self.session.cache_mut();

        match self.strategy {
            GenerationStrategy::Sequential => keys
                .iter()
                .map(|key| cache.get_or_generate(key, &generator))
                .collect(),
            GenerationStrategy::Parallel => cache.get_or_generate_batch(keys, &generator),
        }
    }
}

fn draw<D>(display: &mut D, placement: &TilePlacement, tile: &Tile)
where
    D: DisplayPort + ?Sized,
{
    display.draw_tile(tile.pixels(), placement.draw);
}

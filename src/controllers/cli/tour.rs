use crate::controllers::explorer::commands::ExplorerCommand;
use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::frame_report::FrameReport;
use crate::core::config::ExplorerConfig;
use crate::core::data::point::Point;
use crate::presenters::canvas::canvas::Canvas;
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

/// Frames allowed for the final view to fill in.
pub const MAX_SETTLE_FRAMES: usize = 1000;

/// Zoom toward the seahorse valley on an 800x600 viewport.
pub const DEFAULT_TOUR: &[ExplorerCommand] = &[
    ExplorerCommand::MoveCursor(Point { x: 330, y: 250 }),
    ExplorerCommand::ZoomIn,
    ExplorerCommand::ZoomIn,
    ExplorerCommand::ZoomIn,
    ExplorerCommand::ToggleGenerationTimes,
];

/// Replays a fixed command sequence and saves the settled frame.
pub struct CliTourController<P: FilePresenterPort> {
    presenter: P,
    controller: ExplorerController,
    canvas: Canvas,
    last_report: Option<FrameReport>,
}

impl<P: FilePresenterPort> CliTourController<P> {
    pub fn new(presenter: P, config: &ExplorerConfig) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            presenter,
            controller: ExplorerController::new(config)?,
            canvas: Canvas::new(config.viewport),
            last_report: None,
        })
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn controller(&self) -> &ExplorerController {
        &self.controller
    }

    /// Applies `commands` one frame apart, then renders until the view
    /// is complete.
    pub fn run(&mut self, commands: &[ExplorerCommand]) -> Result<(), Box<dyn std::error::Error>> {
        let start = Instant::now();

        for command in commands {
            self.controller.apply(*command)?;
            self.controller.tick(&mut self.canvas);
        }

        let report = self.controller.settle(&mut self.canvas, MAX_SETTLE_FRAMES);

        if let Some(report) = &report {
            let session = self.controller.session();

            info!(
                "{} at zoom level {}: {}% of {} tiles in {:?}",
                session.mode().display_name(),
                session.view().state().zoom_level,
                report.percent_rendered(),
                report.tiles_expected,
                start.elapsed()
            );

            if !report.is_complete() {
                warn!("view did not settle within {} frames", MAX_SETTLE_FRAMES);
            }

            let stats = session.cache().stats();
            info!(
                "cache answered {} of {} requests, {} tiles resident",
                stats.hits,
                stats.requests(),
                session.cache().len()
            );

            if let Some(slowest) = report
                .tile_timings
                .iter()
                .max_by_key(|timing| timing.generation_time)
            {
                info!(
                    "slowest tile ({}, {}) took {:?}",
                    slowest.key.tile_x, slowest.key.tile_y, slowest.generation_time
                );
            }
        }

        self.last_report = report;

        Ok(())
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if self.last_report.is_some() {
            self.presenter.present(self.canvas.pixels(), filepath)?
        }

        Ok(())
    }
}

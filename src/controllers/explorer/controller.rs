use crate::controllers::explorer::commands::ExplorerCommand;
use crate::core::actions::render_frame::frame_renderer::FrameRenderer;
use crate::core::actions::render_frame::frame_report::FrameReport;
use crate::core::actions::render_frame::ports::display::DisplayPort;
use crate::core::config::{ConfigError, ExplorerConfig};
use crate::core::fractals::params::FractalParamsError;
use crate::core::session::explorer_session::ExplorerSession;
use log::debug;

/// Feeds input commands into a session and renders frames on demand.
#[derive(Debug)]
pub struct ExplorerController {
    renderer: FrameRenderer,
}

impl ExplorerController {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            renderer: FrameRenderer::new(config)?,
        })
    }

    #[must_use]
    pub fn session(&self) -> &ExplorerSession {
        self.renderer.session()
    }

    pub fn apply(&mut self, command: ExplorerCommand) -> Result<(), FractalParamsError> {
        let session = self.renderer.session_mut();

        match command {
            ExplorerCommand::MoveCursor(point) => session.move_cursor(point),
            ExplorerCommand::BeginDrag => session.begin_drag(),
            ExplorerCommand::EndDrag => session.end_drag(),
            ExplorerCommand::ZoomIn => {
                if !session.zoom_in() {
                    debug!("zoom in ignored at level {}", session.view().state().zoom_level);
                }
            }
            ExplorerCommand::ZoomOut => {
                if !session.zoom_out() {
                    debug!("zoom out ignored at level {}", session.view().state().zoom_level);
                }
            }
            ExplorerCommand::Pan(delta) => session.pan(delta),
            ExplorerCommand::ResetView => session.reset_view(),
            ExplorerCommand::SelectMode(mode) => session.set_mode(mode),
            ExplorerCommand::ToggleMaxIterations => {
                let max_iterations = session.toggle_max_iterations();
                debug!("max iterations now {}", max_iterations);
            }
            ExplorerCommand::SetJuliaFocus => {
                session.set_julia_focus_at_cursor()?;
            }
            ExplorerCommand::ToggleGenerationTimes => {
                session.toggle_generation_times();
            }
        }

        Ok(())
    }

    pub fn tick<D>(&mut self, display: &mut D) -> FrameReport
    where
        D: DisplayPort + ?Sized,
    {
        self.renderer.render_frame(display)
    }

    /// Renders until every visible tile is drawn or `max_frames` run out.
    pub fn settle<D>(&mut self, display: &mut D, max_frames: usize) -> Option<FrameReport>
    where
        D: DisplayPort + ?Sized,
    {
        let mut last = None;

        for _ in 0..max_frames {
            let report = self.tick(display);
            let complete = report.is_complete();
            last = Some(report);

            if complete {
                break;
            }
        }

        last
    }
}

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_mode::FractalMode;

/// Every input that changes the exploration state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplorerCommand {
    MoveCursor(Point),
    BeginDrag,
    EndDrag,
    ZoomIn,
    ZoomOut,
    Pan(Complex),
    ResetView,
    SelectMode(FractalMode),
    ToggleMaxIterations,
    /// Use the point under the cursor as the Julia focus.
    SetJuliaFocus,
    ToggleGenerationTimes,
}

impl ExplorerCommand {
    /// Keyboard bindings, case-insensitive.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let command = match key.to_ascii_lowercase() {
            'm' => Self::SelectMode(FractalMode::Mandelbrot),
            'j' => Self::SelectMode(FractalMode::Julia),
            'b' => Self::SelectMode(FractalMode::BurningShip),
            'p' => Self::SelectMode(FractalMode::Pickover),
            's' => Self::SelectMode(FractalMode::CustomMap),
            'z' => Self::ResetView,
            'i' => Self::ToggleMaxIterations,
            'c' => Self::SetJuliaFocus,
            't' => Self::ToggleGenerationTimes,
            _ => return None,
        };

        Some(command)
    }
}

use crate::core::data::complex::Complex;

/// Pan/zoom state of the view.
///
/// `zoom_factor` is always `2^zoom_level`; it is the complex-plane extent of
/// the viewport's shorter axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub center: Complex,
    pub zoom_level: i32,
    pub zoom_factor: f64,
}

impl ViewState {
    #[must_use]
    pub fn new(center: Complex, zoom_level: i32) -> Self {
        Self {
            center,
            zoom_level,
            zoom_factor: 2f64.powi(zoom_level),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Complex::new(-0.5, 0.0), 1)
    }
}

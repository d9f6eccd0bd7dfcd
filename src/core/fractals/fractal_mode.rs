/// The escape-time algorithm a tile is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Pickover,
    CustomMap,
}

impl FractalMode {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Pickover,
        Self::CustomMap,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Pickover => "Pickover stalk",
            Self::CustomMap => "Custom map",
        }
    }

    /// Whether tiles of this mode depend on the Julia focus point.
    #[must_use]
    pub const fn uses_julia_focus(self) -> bool {
        matches!(self, Self::Julia)
    }
}

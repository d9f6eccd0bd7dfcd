pub mod burning_ship;
pub mod custom_map;
pub mod escape;
pub mod fractal_mode;
pub mod julia;
pub mod mandelbrot;
pub mod params;
pub mod pickover;

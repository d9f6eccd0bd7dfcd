pub mod ports;
pub mod triangle_wave;

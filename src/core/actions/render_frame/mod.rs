pub mod frame_renderer;
pub mod frame_report;
pub mod generation_strategy;
pub mod ports;

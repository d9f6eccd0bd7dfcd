pub mod generate_tile;
pub mod render_frame;

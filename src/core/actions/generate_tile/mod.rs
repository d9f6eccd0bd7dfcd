pub mod generate_tile;
pub mod ports;

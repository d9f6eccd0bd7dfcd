pub mod tile_generator;

pub mod tile_pixel_to_complex;

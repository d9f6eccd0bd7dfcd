pub mod view_transform;
pub mod visible_tiles;
pub mod zoom_limits;

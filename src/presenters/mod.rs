pub mod canvas;
pub mod file;

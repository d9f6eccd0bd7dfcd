pub mod actions;
pub mod cache;
pub mod colour_mapping;
pub mod config;
pub mod data;
pub mod fractals;
pub mod session;
pub mod util;
pub mod view;

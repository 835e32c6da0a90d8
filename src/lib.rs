pub mod app_config;
pub mod geometry_utils;
pub mod script;
pub mod systems;

pub type Point2D = (f32, f32);

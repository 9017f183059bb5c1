//! Configuration module

mod render;

pub use render::RenderConfig;

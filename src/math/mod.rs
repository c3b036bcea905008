//! Vector math used by the clippers.

pub mod vec2;

pub use vec2::Vec2;

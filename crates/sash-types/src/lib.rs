pub mod color;
pub mod config;
pub mod geometry;
pub mod part;

pub use color::*;
pub use config::*;
pub use geometry::*;
pub use part::*;

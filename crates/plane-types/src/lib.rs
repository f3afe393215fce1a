pub mod config;
pub mod grid;
pub mod point;
pub mod transform;

pub use config::*;
pub use grid::*;
pub use point::*;
pub use transform::*;

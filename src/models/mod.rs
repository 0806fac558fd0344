pub mod api;
pub mod catalog;
pub mod image;

pub use api::*;
pub use catalog::*;
pub use image::*;

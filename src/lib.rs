pub mod constants;
pub mod destinations;
pub mod slideshow;
pub mod texture_loader;
pub mod ui;

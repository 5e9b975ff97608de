//! Home page hero carousel.

pub mod model;

pub use model::HeroSlide;

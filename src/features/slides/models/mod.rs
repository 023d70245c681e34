mod slide;

pub use slide::Slide;

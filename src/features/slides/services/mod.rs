mod slide_service;

pub use slide_service::SlideService;

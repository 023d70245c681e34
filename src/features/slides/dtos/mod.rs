mod slide_dto;

pub use slide_dto::*;

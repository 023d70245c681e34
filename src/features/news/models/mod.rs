mod news;

pub use news::{News, NEWS_COLUMNS};

mod category;

pub use category::{Category, CategoryName};

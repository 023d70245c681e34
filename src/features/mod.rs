pub mod activities;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod contacts;
pub mod members;
pub mod news;
pub mod organizations;
pub mod roles;
pub mod slides;
pub mod testimonials;
pub mod uploads;
pub mod users;

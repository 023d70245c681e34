mod activity;

pub use activity::Activity;

mod testimonial;

pub use testimonial::Testimonial;

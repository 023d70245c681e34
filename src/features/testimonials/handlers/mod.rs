pub mod testimonial_handler;

pub use testimonial_handler::{
    __path_create_testimonial, __path_delete_testimonial, __path_get_testimonial,
    __path_list_testimonials, __path_update_testimonial, create_testimonial, delete_testimonial,
    get_testimonial, list_testimonials, update_testimonial,
};

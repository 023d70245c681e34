pub mod slide_handler;

pub use slide_handler::{
    __path_create_slide, __path_delete_slide, __path_get_slide, __path_list_slides,
    __path_update_slide, create_slide, delete_slide, get_slide, list_slides, update_slide,
};

pub mod comment_handler;

pub use comment_handler::{
    __path_create_comment, __path_delete_comment, __path_get_comment, __path_list_comments,
    __path_update_comment, create_comment, delete_comment, get_comment, list_comments,
    update_comment,
};

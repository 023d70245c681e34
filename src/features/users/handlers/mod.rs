pub mod user_handler;

pub use user_handler::{
    __path_delete_user, __path_get_user, __path_list_users, __path_update_user, delete_user,
    get_user, list_users, update_user,
};

pub mod role_handler;

pub use role_handler::{
    __path_create_role, __path_delete_role, __path_get_role, __path_list_roles,
    __path_update_role, create_role, delete_role, get_role, list_roles, update_role,
};

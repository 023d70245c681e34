pub mod activity_handler;

pub use activity_handler::{
    __path_create_activity, __path_delete_activity, __path_get_activity,
    __path_list_activities, __path_update_activity, create_activity, delete_activity,
    get_activity, list_activities, update_activity,
};

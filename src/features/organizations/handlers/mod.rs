pub mod organization_handler;

pub use organization_handler::{
    __path_delete_contact, __path_get_public_organization, __path_update_public_organization,
    delete_contact, get_public_organization, update_public_organization,
};

pub mod news_handler;

pub use news_handler::{
    __path_create_news, __path_delete_news, __path_get_news, __path_list_news,
    __path_list_news_comments, __path_update_news, create_news, delete_news, get_news,
    list_news, list_news_comments, update_news,
};

pub mod catchers;
pub mod page_handler;
pub mod upload_handler;

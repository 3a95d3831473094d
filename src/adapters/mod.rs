pub mod form_handler;
pub mod health_handler;
pub mod ui_handler;

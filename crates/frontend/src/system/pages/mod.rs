pub mod main_page;
pub mod not_found;

pub mod empty_state;
pub mod error;
pub mod fetch_hook;
pub mod fetch_render;
pub mod file_reader;
pub mod form_draft;
pub mod input;
pub mod loading;
pub mod store;
pub mod toast;

pub mod auth;
pub mod avatar;
pub mod challenges;
pub mod comments;
pub mod image_picker;
pub mod layout;
pub mod learning_plans;
pub mod profile;
pub mod recipes;

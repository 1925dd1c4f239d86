pub mod challenges;
pub mod create_learning_plan;
pub mod create_recipe;
pub mod edit_recipe;
pub mod home;
pub mod landing;
pub mod learning_plans;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod profile_edit;
pub mod recipe;
pub mod recipes;
pub mod signup;

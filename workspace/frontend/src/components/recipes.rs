mod entry_list_input;
mod ingredients_input;
mod recipe_card;
mod recipe_detail;
mod recipe_form;
mod steps_input;

pub use recipe_card::RecipeCard;
pub use recipe_detail::RecipeDetail;
pub use recipe_form::RecipeForm;

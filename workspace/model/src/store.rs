//! Data access capabilities the views read through.
//!
//! Pages never touch mock arrays directly; they ask a [`CookbookStore`]. The
//! only implementation today is [`crate::mock_data::MockStore`], but a store
//! backed by a real API can slot in without the views changing.

use common::{CreateLearningPlanRequest, CreateRecipeRequest, UpdateProfileRequest};

use crate::entities::prelude::*;
use crate::error::Result;

pub trait CookbookStore {
    /// Recipes for the home feed, in trending order.
    fn feed(&self) -> Vec<Recipe>;

    /// Everything on the explore page.
    fn recipes(&self) -> Vec<Recipe>;

    fn recipe(&self, id: &str) -> Result<Recipe>;

    fn recipes_by_author(&self, author_id: &str) -> Vec<Recipe>;

    fn comments(&self, recipe_id: &str) -> Vec<Comment>;

    /// The signed-in user.
    fn current_user(&self) -> Profile;

    /// A profile by slug; `None` means the signed-in user.
    fn profile(&self, username: Option<&str>) -> Result<Profile>;

    fn challenges(&self) -> Vec<Challenge>;

    fn learning_plans(&self) -> Vec<LearningPlan>;

    fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<()>;

    fn update_recipe(&self, id: &str, request: &CreateRecipeRequest) -> Result<()>;

    fn update_profile(&self, request: &UpdateProfileRequest) -> Result<()>;

    fn create_learning_plan(&self, request: &CreateLearningPlanRequest) -> Result<()>;
}

//! Plain records rendered by the views. Nothing here is persisted; a page
//! owns its records for as long as it is mounted.

pub mod author;
pub mod challenge;
pub mod comment;
pub mod learning_plan;
pub mod profile;
pub mod recipe;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::author::{profile_slug, Author};
    pub use super::challenge::{Challenge, ChallengeStatus};
    pub use super::comment::Comment;
    pub use super::learning_plan::{Difficulty, LearningPlan, PlanDuration};
    pub use super::profile::Profile;
    pub use super::recipe::{Recipe, RecipeCategory};
}

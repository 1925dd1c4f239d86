pub mod challenges;
pub mod cooking_time;
pub mod error;
pub mod learning_plans;
pub mod recipes;

#[cfg(test)]
pub mod testing;

pub use challenges::{partition_by_status, StatusPartition};
pub use cooking_time::parse_minutes;
pub use error::{ComputeError, Result};
pub use learning_plans::DifficultyTab;
pub use recipes::{load_more, CategoryFilter, FeedOrder, RecipeQuery, TimeFilter};

pub mod comments;
pub mod entities;
pub mod error;
pub mod forms;
pub mod like;
pub mod mock_data;
pub mod store;

// Re-export tracing for use in this crate
pub use tracing;

pub use comments::CommentThread;
pub use error::{ModelError, Result};
pub use like::{LikeChange, LikeState, Likeable};
pub use mock_data::{MockStore, CURRENT_USER_ID, PLACEHOLDER_IMAGE_URL};
pub use store::CookbookStore;

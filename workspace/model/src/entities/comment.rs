use serde::{Deserialize, Serialize};

use super::author::Author;
use crate::like::LikeState;

/// A comment on a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub created_at: String,
    #[serde(flatten)]
    pub likes: LikeState,
}

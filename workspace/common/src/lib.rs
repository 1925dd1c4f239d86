//! Common transport-layer types for the CulinaryCraft API contract.
//! No backend exists yet; these structs describe the payloads the frontend
//! assembles on submit so a real API can adopt them without reshaping.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===================== Recipes =====================

/// Request body for creating (or updating) a recipe.
///
/// `category` carries the lower-case select value (e.g. `breakfast`).
/// `image_url` is either a remote URL or a `data:` URL produced by the
/// local image preview.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub cooking_time: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
}

// ===================== Profiles =====================

/// A newly picked avatar file, already read into a data URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUpload {
    pub file_name: String,
    pub data_url: String,
}

/// Request body for updating the current user's profile.
///
/// `avatar` is only set when a new file was chosen.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    pub avatar: Option<AvatarUpload>,
    /// True when the user removed the existing avatar without picking a new one.
    #[serde(default)]
    pub remove_avatar: bool,
}

// ===================== Learning plans =====================

/// Request body for publishing a learning plan.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLearningPlanRequest {
    pub title: String,
    pub description: String,
    /// Select value, e.g. `2-weeks` or `custom`.
    pub duration: String,
    /// `Beginner`, `Intermediate` or `Advanced`.
    pub difficulty: String,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_recipe_request_uses_contract_field_names() {
        let request = CreateRecipeRequest {
            title: "Test".to_string(),
            description: "Test desc".to_string(),
            cooking_time: "10 mins".to_string(),
            category: "breakfast".to_string(),
            ingredients: vec!["2 eggs".to_string()],
            steps: vec!["Whisk".to_string()],
            tags: vec![],
            image_url: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["cookingTime"], json!("10 mins"));
        assert_eq!(value["imageUrl"], json!(null));
        assert!(value.get("cooking_time").is_none());
    }

    #[test]
    fn test_update_profile_request_defaults_remove_avatar() {
        let request: UpdateProfileRequest = serde_json::from_value(json!({
            "name": "John Doe",
            "bio": "",
            "location": "",
            "website": "",
            "avatar": null
        }))
        .unwrap();

        assert!(!request.remove_avatar);
        assert!(request.avatar.is_none());
    }
}

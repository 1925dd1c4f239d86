use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::author::Author;
use crate::error::ModelError;
use crate::like::LikeState;

/// Categories offered by the recipe form. The select value is the
/// lower-cased label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Appetizers,
    Desserts,
    Drinks,
    Snacks,
    Vegetarian,
    Vegan,
    GlutenFree,
    LowCarb,
}

impl RecipeCategory {
    pub const ALL: [RecipeCategory; 11] = [
        RecipeCategory::Breakfast,
        RecipeCategory::Lunch,
        RecipeCategory::Dinner,
        RecipeCategory::Appetizers,
        RecipeCategory::Desserts,
        RecipeCategory::Drinks,
        RecipeCategory::Snacks,
        RecipeCategory::Vegetarian,
        RecipeCategory::Vegan,
        RecipeCategory::GlutenFree,
        RecipeCategory::LowCarb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "Breakfast",
            RecipeCategory::Lunch => "Lunch",
            RecipeCategory::Dinner => "Dinner",
            RecipeCategory::Appetizers => "Appetizers",
            RecipeCategory::Desserts => "Desserts",
            RecipeCategory::Drinks => "Drinks",
            RecipeCategory::Snacks => "Snacks",
            RecipeCategory::Vegetarian => "Vegetarian",
            RecipeCategory::Vegan => "Vegan",
            RecipeCategory::GlutenFree => "Gluten-Free",
            RecipeCategory::LowCarb => "Low-Carb",
        }
    }

    /// Select/payload value, e.g. `gluten-free`.
    pub fn value(&self) -> &'static str {
        match self {
            RecipeCategory::Breakfast => "breakfast",
            RecipeCategory::Lunch => "lunch",
            RecipeCategory::Dinner => "dinner",
            RecipeCategory::Appetizers => "appetizers",
            RecipeCategory::Desserts => "desserts",
            RecipeCategory::Drinks => "drinks",
            RecipeCategory::Snacks => "snacks",
            RecipeCategory::Vegetarian => "vegetarian",
            RecipeCategory::Vegan => "vegan",
            RecipeCategory::GlutenFree => "gluten-free",
            RecipeCategory::LowCarb => "low-carb",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecipeCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        // The explore page filter says "dessert" where the form says "desserts".
        let needle = if needle == "dessert" { "desserts".to_string() } else { needle };
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.value() == needle)
            .ok_or_else(|| ModelError::UnknownValue {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// A shareable recipe.
///
/// `likes`/`isLiked` are flattened from [`LikeState`] so the JSON shape stays
/// `{ "likes": 124, "isLiked": false, ... }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub author: Author,
    pub created_at: String,
    pub cooking_time: String,
    pub servings: u32,
    #[serde(default)]
    pub category: Option<RecipeCategory>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub likes: LikeState,
    pub comments: u32,
    pub is_saved: bool,
}

impl Recipe {
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.author.id == user_id
    }
}

use common::CreateRecipeRequest;
use tracing::{debug, instrument};

use super::{is_blank, missing, Editable, EntryList, TagSet};
use crate::entities::recipe::{Recipe, RecipeCategory};
use crate::error::{ModelError, Result};

/// Edit buffer for the recipe form, in create or edit mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    /// Set when editing an existing recipe.
    pub recipe_id: Option<String>,
    pub title: String,
    pub description: String,
    pub cooking_time: String,
    pub category: Option<RecipeCategory>,
    pub ingredients: EntryList,
    pub steps: EntryList,
    pub tags: TagSet,
    /// Remote URL or `data:` URL of the picked image.
    pub image: Option<String>,
}

/// A single edit on the recipe form.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeChange {
    Title(String),
    Description(String),
    CookingTime(String),
    Category(Option<RecipeCategory>),
    Ingredients(EntryList),
    Steps(EntryList),
    Image(Option<String>),
    AddTag(String),
    RemoveTag(String),
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            recipe_id: None,
            title: String::new(),
            description: String::new(),
            cooking_time: String::new(),
            category: None,
            ingredients: EntryList::new("ingredient"),
            steps: EntryList::new("step"),
            tags: TagSet::new(),
            image: None,
        }
    }
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefills the form for editing `recipe`.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            recipe_id: Some(recipe.id.clone()),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            cooking_time: recipe.cooking_time.clone(),
            category: recipe.category,
            ingredients: EntryList::from_entries("ingredient", recipe.ingredients.clone()),
            steps: EntryList::from_entries("step", recipe.steps.clone()),
            tags: TagSet::from_tags(recipe.tags.iter().cloned()),
            image: Some(recipe.image_url.clone()).filter(|url| !url.is_empty()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.recipe_id.is_some()
    }

    /// Required fields that are still blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing([
            ("title", !is_blank(&self.title)),
            ("description", !is_blank(&self.description)),
            ("cooking time", !is_blank(&self.cooking_time)),
            ("category", self.category.is_some()),
            ("ingredients", self.ingredients.has_filled()),
            ("steps", self.steps.has_filled()),
        ])
    }

    /// Assembles the payload, or reports every blank required field.
    #[instrument(skip(self), fields(title = %self.title, edit = self.is_edit()))]
    pub fn submit(&self) -> Result<CreateRecipeRequest> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "Recipe form has blank required fields");
            return Err(ModelError::MissingFields(missing));
        }

        // missing_fields() guarantees a category here
        let category = self.category.map(|c| c.value()).unwrap_or_default();

        Ok(CreateRecipeRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            cooking_time: self.cooking_time.clone(),
            category: category.to_string(),
            ingredients: self.ingredients.filled(),
            steps: self.steps.filled(),
            tags: self.tags.to_vec(),
            image_url: self.image.clone(),
        })
    }
}

impl Editable for RecipeDraft {
    type Change = RecipeChange;

    fn apply(&mut self, change: RecipeChange) {
        match change {
            RecipeChange::Title(title) => self.title = title,
            RecipeChange::Description(description) => self.description = description,
            RecipeChange::CookingTime(cooking_time) => self.cooking_time = cooking_time,
            RecipeChange::Category(category) => self.category = category,
            RecipeChange::Ingredients(list) => self.ingredients = list,
            RecipeChange::Steps(list) => self.steps = list,
            RecipeChange::Image(image) => self.image = image,
            RecipeChange::AddTag(tag) => {
                if self.tags.add(&tag) {
                    debug!(tag = tag.trim(), "Added tag");
                }
            }
            RecipeChange::RemoveTag(tag) => {
                self.tags.remove(&tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data::MockStore;
    use crate::store::CookbookStore;

    fn filled_draft() -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.title = "Test".to_string();
        draft.description = "Test desc".to_string();
        draft.cooking_time = "10 mins".to_string();
        draft.category = Some("breakfast".parse().unwrap());
        draft.ingredients.set(0, "1 egg").unwrap();
        draft.steps.set(0, "Fry the egg").unwrap();
        draft
    }

    #[test]
    fn test_submit_with_all_required_fields() {
        let request = filled_draft().submit().expect("draft should be complete");
        assert_eq!(request.title, "Test");
        assert_eq!(request.category, "breakfast");
        assert_eq!(request.ingredients, vec!["1 egg".to_string()]);
        assert_eq!(request.steps, vec!["Fry the egg".to_string()]);
        assert!(request.tags.is_empty());
        assert_eq!(request.image_url, None);
    }

    #[test]
    fn test_each_blank_required_field_blocks_submit() {
        let blankers: Vec<(&str, fn(&mut RecipeDraft))> = vec![
            ("title", |d| d.title.clear()),
            ("description", |d| d.description = "   ".into()),
            ("cooking time", |d| d.cooking_time.clear()),
            ("category", |d| d.category = None),
            ("ingredients", |d| d.ingredients.set(0, "").unwrap()),
            ("steps", |d| d.steps.set(0, " ").unwrap()),
        ];

        for (field, blank) in blankers {
            let mut draft = filled_draft();
            blank(&mut draft);
            let err = draft.submit().unwrap_err();
            assert_eq!(err, ModelError::MissingFields(vec![field]), "field {}", field);
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let err = RecipeDraft::new().submit().unwrap_err();
        assert!(err.is_missing_fields());
        assert_eq!(
            err,
            ModelError::MissingFields(vec![
                "title",
                "description",
                "cooking time",
                "category",
                "ingredients",
                "steps"
            ])
        );
    }

    #[test]
    fn test_submit_drops_blank_rows_and_keeps_tags() {
        let mut draft = filled_draft();
        draft.ingredients.push_blank();
        draft.steps.push_blank();
        draft.steps.set(1, "Serve").unwrap();
        draft.tags.add("quick");
        draft.image = Some("data:image/png;base64,AAAA".to_string());

        let request = draft.submit().unwrap();
        assert_eq!(request.ingredients.len(), 1);
        assert_eq!(request.steps, vec!["Fry the egg".to_string(), "Serve".to_string()]);
        assert_eq!(request.tags, vec!["quick".to_string()]);
        assert!(request.image_url.unwrap().starts_with("data:"));
    }

    #[test]
    fn test_from_recipe_prefills_edit_mode() {
        let store = MockStore::new();
        let recipe = store.recipe("1").unwrap();
        let draft = RecipeDraft::from_recipe(&recipe);

        assert!(draft.is_edit());
        assert_eq!(draft.title, recipe.title);
        assert_eq!(draft.ingredients.entries(), recipe.ingredients.as_slice());
        assert_eq!(draft.tags.len(), recipe.tags.len());
        assert!(draft.submit().is_ok());
    }

    #[test]
    fn test_image_applied_after_typing_keeps_fields() {
        let mut draft = RecipeDraft::new();
        draft.apply(RecipeChange::Title("Shakshuka".into()));
        draft.apply(RecipeChange::CookingTime("25 mins".into()));
        draft.apply(RecipeChange::AddTag(" brunch ".into()));
        draft.apply(RecipeChange::AddTag("brunch".into()));
        draft.apply(RecipeChange::Image(Some("data:image/png;base64,AAAA".into())));

        assert_eq!(draft.title, "Shakshuka");
        assert_eq!(draft.cooking_time, "25 mins");
        assert_eq!(draft.tags.len(), 1);
        assert_eq!(draft.image.as_deref(), Some("data:image/png;base64,AAAA"));

        draft.apply(RecipeChange::RemoveTag("brunch".into()));
        draft.apply(RecipeChange::Image(None));
        assert_eq!(draft.tags.len(), 0);
        assert!(draft.image.is_none());
    }
}

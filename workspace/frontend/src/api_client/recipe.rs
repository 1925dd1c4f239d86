use common::CreateRecipeRequest;
use model::entities::prelude::{Comment, Recipe};
use crate::api_client;
use crate::common::store::StoreHandle;

/// Recipes for the home feed
pub async fn get_feed(store: StoreHandle) -> Result<Vec<Recipe>, String> {
    log::trace!("Fetching home feed");
    let result = api_client::get("/feed", || Ok(store.feed())).await;
    if let Ok(recipes) = &result {
        log::info!("Fetched {} feed recipes", recipes.len());
    }
    result
}

/// All recipes on the explore page
pub async fn get_recipes(store: StoreHandle) -> Result<Vec<Recipe>, String> {
    log::trace!("Fetching all recipes");
    let result = api_client::get("/recipes", || Ok(store.recipes())).await;
    if let Ok(recipes) = &result {
        log::info!("Fetched {} recipes", recipes.len());
    }
    result
}

/// Get a specific recipe by ID
pub async fn get_recipe(store: StoreHandle, recipe_id: String) -> Result<Recipe, String> {
    log::trace!("Fetching recipe with ID: {}", recipe_id);
    let result = api_client::get(&format!("/recipes/{}", recipe_id), || store.recipe(&recipe_id)).await;
    match &result {
        Ok(recipe) => log::info!("Fetched recipe: {} (ID: {})", recipe.title, recipe.id),
        Err(e) => log::error!("Failed to fetch recipe {}: {}", recipe_id, e),
    }
    result
}

/// Recipes published by one author
pub async fn get_recipes_by_author(store: StoreHandle, author_id: String) -> Result<Vec<Recipe>, String> {
    log::trace!("Fetching recipes by author: {}", author_id);
    api_client::get(&format!("/profiles/{}/recipes", author_id), || {
        Ok(store.recipes_by_author(&author_id))
    })
    .await
}

/// Comments on a recipe, newest first
pub async fn get_comments(store: StoreHandle, recipe_id: String) -> Result<Vec<Comment>, String> {
    log::trace!("Fetching comments for recipe: {}", recipe_id);
    api_client::get(&format!("/recipes/{}/comments", recipe_id), || {
        Ok(store.comments(&recipe_id))
    })
    .await
}

/// Publish a new recipe
pub async fn create_recipe(store: StoreHandle, request: CreateRecipeRequest) -> Result<(), String> {
    log::debug!("Creating new recipe: {}", request.title);
    let result = api_client::post("/recipes", &request, |body| store.create_recipe(body)).await;
    match &result {
        Ok(()) => log::info!("Successfully created recipe: {}", request.title),
        Err(e) => log::error!("Failed to create recipe '{}': {}", request.title, e),
    }
    result
}

/// Save changes to an existing recipe
pub async fn update_recipe(
    store: StoreHandle,
    recipe_id: String,
    request: CreateRecipeRequest,
) -> Result<(), String> {
    log::debug!("Updating recipe {}: {}", recipe_id, request.title);
    let result = api_client::put(&format!("/recipes/{}", recipe_id), &request, |body| {
        store.update_recipe(&recipe_id, body)
    })
    .await;
    match &result {
        Ok(()) => log::info!("Successfully updated recipe {}", recipe_id),
        Err(e) => log::error!("Failed to update recipe {}: {}", recipe_id, e),
    }
    result
}

use yew::prelude::*;

use crate::components::recipes::RecipeForm;

#[function_component(CreateRecipePage)]
pub fn create_recipe_page() -> Html {
    html! {
        <div class="container max-w-4xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{"Create a New Recipe"}</h1>
                <p class="text-base-content/70 mt-1">{"Share your culinary creation with the community"}</p>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <RecipeForm />
                </div>
            </div>
        </div>
    }
}

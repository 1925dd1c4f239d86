use model::entities::prelude::Recipe;
use model::forms::RecipeDraft;
use model::CURRENT_USER_ID;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::recipe::get_recipe;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::store::use_store;
use crate::components::recipes::RecipeForm;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe_id: String,
}

/// The recipe form in edit mode, prefilled from the stored recipe.
#[function_component(EditRecipePage)]
pub fn edit_recipe_page(props: &Props) -> Html {
    let store = use_store();
    let (state, refetch) = use_fetch_with_refetch(props.recipe_id.clone(), move |recipe_id: String| {
        get_recipe(store.clone(), recipe_id)
    });

    let render = Callback::from(|recipe: Recipe| {
        if !recipe.is_owned_by(CURRENT_USER_ID) {
            log::warn!("Refusing to edit recipe {} owned by {}", recipe.id, recipe.author.id);
            return html! {
                <ErrorDisplay
                    title={Some(AttrValue::from("Not your recipe"))}
                    message={format!("Only {} can edit \"{}\".", recipe.author.name, recipe.title)}
                    back_to={Some(Route::Recipe { id: recipe.id.clone() })}
                />
            };
        }
        html! {
            <>
                <div class="flex items-center justify-between">
                    <h1 class="text-3xl font-bold">{"Edit Recipe"}</h1>
                    <Link<Route> to={Route::Recipe { id: recipe.id.clone() }} classes="btn btn-ghost btn-sm">
                        <i class="fas fa-arrow-left mr-1"></i>{"Back to recipe"}
                    </Link<Route>>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <RecipeForm key={recipe.id.clone()} initial={RecipeDraft::from_recipe(&recipe)} />
                    </div>
                </div>
            </>
        }
    });

    html! {
        <div class="container max-w-4xl mx-auto space-y-6">
            <FetchRender<Recipe>
                state={(*state).clone()}
                {render}
                on_retry={Some(Callback::from(move |_| refetch.emit(())))}
                loading_text={Some(AttrValue::from("Loading recipe..."))}
                back_to={Some(Route::Recipes)}
            />
        </div>
    }
}

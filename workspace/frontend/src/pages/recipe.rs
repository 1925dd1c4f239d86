use model::entities::prelude::{Comment, Recipe};
use model::CURRENT_USER_ID;
use yew::prelude::*;

use crate::api_client::recipe::{get_comments, get_recipe};
use crate::Route;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::store::use_store;
use crate::components::recipes::RecipeDetail;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe_id: String,
}

#[function_component(RecipePage)]
pub fn recipe_page(props: &Props) -> Html {
    let store = use_store();
    let (state, refetch) = use_fetch_with_refetch(props.recipe_id.clone(), move |recipe_id: String| {
        let store = store.clone();
        async move {
            let recipe = get_recipe(store.clone(), recipe_id.clone()).await?;
            let comments = get_comments(store, recipe_id).await?;
            Ok::<_, String>((recipe, comments))
        }
    });

    let render = Callback::from(|(recipe, comments): (Recipe, Vec<Comment>)| {
        let is_owner = recipe.is_owned_by(CURRENT_USER_ID);
        html! {
            <RecipeDetail key={recipe.id.clone()} recipe={recipe.clone()} {comments} {is_owner} />
        }
    });

    html! {
        <FetchRender<(Recipe, Vec<Comment>)>
            state={(*state).clone()}
            {render}
            on_retry={Some(Callback::from(move |_| refetch.emit(())))}
            loading_text={Some(AttrValue::from("Loading recipe..."))}
            back_to={Some(Route::Recipes)}
        />
    }
}

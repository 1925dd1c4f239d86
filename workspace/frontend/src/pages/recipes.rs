use compute::{CategoryFilter, RecipeQuery, TimeFilter};
use model::entities::prelude::Recipe;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::recipe::get_recipes;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::{CardGrid, FetchRender};
use crate::common::input::event_value;
use crate::common::store::use_store;
use crate::common::toast::use_toast;
use crate::components::recipes::RecipeCard;

/// `?q=` query string shared by the navbar search, tag links and this page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[function_component(RecipesPage)]
pub fn recipes_page() -> Html {
    let location = use_location();
    let url_search = location
        .and_then(|l| l.query::<SearchQuery>().ok())
        .map(|query| query.q)
        .unwrap_or_default();

    let query = use_state(|| RecipeQuery {
        search: url_search.clone(),
        ..RecipeQuery::default()
    });

    // A new search from the navbar while this page is open.
    {
        let query = query.clone();
        use_effect_with(url_search, move |search| {
            if query.search != *search {
                query.set(RecipeQuery {
                    search: search.clone(),
                    ..(*query).clone()
                });
            }
            || ()
        });
    }

    let store = use_store();
    let toast = use_toast();
    let (recipes_state, refetch) = use_fetch_with_refetch((), move |_| get_recipes(store.clone()));

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            query.set(RecipeQuery {
                search: event_value(&e),
                ..(*query).clone()
            });
        })
    };

    let on_category = {
        let query = query.clone();
        let toast = toast.clone();
        Callback::from(move |e: Event| match event_value(&e).parse::<CategoryFilter>() {
            Ok(category) => query.set(RecipeQuery {
                category,
                ..(*query).clone()
            }),
            Err(err) => toast.show_error(err.to_string()),
        })
    };

    let on_time = {
        let query = query.clone();
        Callback::from(move |e: Event| match event_value(&e).parse::<TimeFilter>() {
            Ok(time) => query.set(RecipeQuery {
                time,
                ..(*query).clone()
            }),
            Err(err) => toast.show_error(err.to_string()),
        })
    };

    let render = {
        let query = (*query).clone();
        Callback::from(move |recipes: Vec<Recipe>| {
            html! {
                <CardGrid<Recipe>
                    items={query.apply(&recipes)}
                    render_item={Callback::from(|recipe: Recipe| html! { <RecipeCard key={recipe.id.clone()} recipe={recipe.clone()} /> })}
                    empty_title="No recipes found"
                    empty_message={Some("Try adjusting your search or filter to find what you're looking for.".to_string())}
                    container_class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6"
                />
            }
        })
    };

    html! {
        <div class="container mx-auto space-y-6">
            <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                <h1 class="text-3xl font-bold flex items-center gap-2">
                    <i class="fas fa-utensils text-primary"></i>{"Explore Recipes"}
                </h1>
                <label class="input input-bordered flex items-center gap-2 w-full md:w-64">
                    <i class="fas fa-search text-base-content/50"></i>
                    <input
                        type="search"
                        class="grow"
                        placeholder="Search recipes..."
                        value={query.search.clone()}
                        oninput={on_search}
                    />
                </label>
            </div>

            <div class="flex flex-wrap gap-4">
                <select class="select select-bordered w-full md:w-48" aria-label="Category" onchange={on_category}>
                    { for CategoryFilter::options().into_iter().map(|c| html! {
                        <option value={c.value()} selected={query.category == c}>{c.label()}</option>
                    }) }
                </select>
                <select class="select select-bordered w-full md:w-48" aria-label="Cooking Time" onchange={on_time}>
                    { for TimeFilter::ALL.into_iter().map(|t| html! {
                        <option value={t.value()} selected={query.time == t}>{t.label()}</option>
                    }) }
                </select>
            </div>

            <FetchRender<Vec<Recipe>>
                state={(*recipes_state).clone()}
                {render}
                on_retry={Some(Callback::from(move |_| refetch.emit(())))}
            />
        </div>
    }
}

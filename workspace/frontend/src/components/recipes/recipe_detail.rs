use model::entities::prelude::{Comment, Recipe};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::use_toast;
use crate::components::avatar::Avatar;
use crate::components::comments::CommentSection;
use crate::hooks::{like_icon, use_flag_toggle, use_like_toggle};
use crate::pages::recipes::SearchQuery;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: Recipe,
    pub comments: Vec<Comment>,
    #[prop_or_default]
    pub is_owner: bool,
}

#[function_component(RecipeDetail)]
pub fn recipe_detail(props: &Props) -> Html {
    let recipe = &props.recipe;
    let (likes, on_like) = use_like_toggle(recipe.likes, "recipe");
    let (saved, on_save) = use_flag_toggle(
        recipe.is_saved,
        "Recipe saved to your collection",
        "Recipe removed from your collection",
    );
    let toast = use_toast();

    let on_share = {
        let path = Route::Recipe { id: recipe.id.clone() }.to_path();
        Callback::from(move |_| toast.show_info(format!("Share this recipe: {}", path)))
    };

    let author_route = Route::author_profile(&recipe.author.id);

    html! {
        <article class="max-w-4xl mx-auto space-y-6">
            <div class="w-full h-[300px] md:h-[400px] rounded-box overflow-hidden">
                <img src={recipe.image_url.clone()} alt={recipe.title.clone()} class="w-full h-full object-cover" />
            </div>

            <div class="flex items-start justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">{&recipe.title}</h1>
                    <div class="flex items-center gap-4 mt-2 text-sm text-base-content/70">
                        <span><i class="far fa-clock mr-1"></i>{&recipe.cooking_time}</span>
                        <span><i class="fas fa-users mr-1"></i>{format!("{} servings", recipe.servings)}</span>
                        if let Some(category) = recipe.category {
                            <span class="badge badge-outline">{category.label()}</span>
                        }
                    </div>
                </div>
                <div class="flex gap-2">
                    if props.is_owner {
                        <Link<Route> to={Route::EditRecipe { id: recipe.id.clone() }} classes="btn btn-outline btn-sm">
                            <i class="fas fa-edit"></i>{" Edit"}
                        </Link<Route>>
                    }
                    <button
                        class={classes!("btn", "btn-outline", "btn-sm", "btn-square", saved.then_some("text-primary"))}
                        aria-label="save"
                        onclick={on_save}
                    >
                        <i class={if saved { "fas fa-bookmark" } else { "far fa-bookmark" }}></i>
                    </button>
                    <button class="btn btn-outline btn-sm btn-square" aria-label="share" onclick={on_share}>
                        <i class="fas fa-share-alt"></i>
                    </button>
                </div>
            </div>

            <div class="flex items-center gap-3 py-3 border-b border-base-300">
                <Link<Route> to={author_route.clone()}>
                    <Avatar name={recipe.author.name.clone()} src={recipe.author.avatar.clone()} />
                </Link<Route>>
                <div>
                    <Link<Route> to={author_route} classes="font-medium hover:underline">{&recipe.author.name}</Link<Route>>
                    <p class="text-sm text-base-content/60">{format!("Posted on {}", recipe.created_at)}</p>
                </div>
            </div>

            <p class="text-lg leading-relaxed">{&recipe.description}</p>

            <section class="space-y-3">
                <h2 class="text-xl font-semibold"><i class="fas fa-utensils mr-2"></i>{"Ingredients"}</h2>
                <ul class="grid grid-cols-1 md:grid-cols-2 gap-2">
                    { for recipe.ingredients.iter().enumerate().map(|(i, ingredient)| html! {
                        <li key={i} class="flex items-start gap-2">
                            <span class="inline-block w-2 h-2 rounded-full bg-primary mt-2 shrink-0"></span>
                            {ingredient}
                        </li>
                    }) }
                </ul>
            </section>

            <section class="space-y-4">
                <h2 class="text-xl font-semibold">{"Instructions"}</h2>
                <ol class="space-y-6">
                    { for recipe.steps.iter().enumerate().map(|(i, step)| html! {
                        <li key={i} class="space-y-1">
                            <h3 class="font-medium">{format!("Step {}", i + 1)}</h3>
                            <p class="leading-relaxed">{step}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <div class="flex flex-wrap gap-2 pt-2">
                { for recipe.tags.iter().map(|tag| html! {
                    <Link<Route, SearchQuery> to={Route::Recipes} query={Some(SearchQuery { q: tag.clone() })} classes="btn btn-secondary btn-sm">
                        {format!("#{}", tag)}
                    </Link<Route, SearchQuery>>
                }) }
            </div>

            <div class="flex items-center gap-6 py-4 border-y border-base-300">
                <button class="btn btn-ghost gap-2" aria-label="like" onclick={on_like}>
                    <i class={classes!(like_icon(likes.liked), "text-lg")}></i>
                    {format!("{} likes", likes.count)}
                </button>
                <span class="flex items-center gap-2 text-base-content/70">
                    <i class="far fa-comment text-lg"></i>
                    {format!("{} comments", recipe.comments)}
                </span>
            </div>

            <CommentSection recipe_id={recipe.id.clone()} comments={props.comments.clone()} />
        </article>
    }
}

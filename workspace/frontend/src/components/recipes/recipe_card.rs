use model::entities::prelude::Recipe;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::use_toast;
use crate::components::avatar::{Avatar, AvatarSize};
use crate::hooks::{like_icon, use_flag_toggle, use_like_toggle};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe: Recipe,
}

#[function_component(RecipeCard)]
pub fn recipe_card(props: &Props) -> Html {
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

    let detail = Route::Recipe { id: recipe.id.clone() };

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow overflow-hidden">
            <Link<Route> to={detail.clone()}>
                <figure class="relative h-48 w-full overflow-hidden">
                    <img
                        src={recipe.image_url.clone()}
                        alt={recipe.title.clone()}
                        class="h-full w-full object-cover transition-transform duration-300 hover:scale-105"
                    />
                    <div class="absolute bottom-0 inset-x-0 bg-gradient-to-t from-black/60 to-transparent p-3">
                        <span class="text-xs font-medium text-white">
                            <i class="far fa-clock mr-1"></i>{&recipe.cooking_time}
                        </span>
                    </div>
                </figure>
            </Link<Route>>
            <div class="card-body p-4 gap-2">
                <Link<Route> to={detail} classes="hover:underline">
                    <h3 class="card-title text-lg line-clamp-1">{&recipe.title}</h3>
                </Link<Route>>
                <p class="text-sm text-base-content/70 line-clamp-2">{&recipe.description}</p>
                <Link<Route> to={Route::author_profile(&recipe.author.id)} classes="flex items-center gap-2 mt-1">
                    <Avatar name={recipe.author.name.clone()} src={recipe.author.avatar.clone()} size={AvatarSize::Small} />
                    <span class="text-sm font-medium">{&recipe.author.name}</span>
                </Link<Route>>
                <div class="card-actions justify-between items-center mt-2">
                    <div class="flex items-center gap-3">
                        <button class="btn btn-ghost btn-sm gap-1 px-2" aria-label="like" onclick={on_like}>
                            <i class={like_icon(likes.liked)}></i>
                            <span>{likes.count}</span>
                        </button>
                        <span class="flex items-center gap-1 text-sm text-base-content/70">
                            <i class="far fa-comment"></i>{recipe.comments}
                        </span>
                    </div>
                    <div class="flex items-center gap-1">
                        <button
                            class={classes!("btn", "btn-ghost", "btn-sm", "btn-square", saved.then_some("text-primary"))}
                            aria-label="save"
                            onclick={on_save}
                        >
                            <i class={if saved { "fas fa-bookmark" } else { "far fa-bookmark" }}></i>
                        </button>
                        <button class="btn btn-ghost btn-sm btn-square" aria-label="share" onclick={on_share}>
                            <i class="fas fa-share-alt"></i>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

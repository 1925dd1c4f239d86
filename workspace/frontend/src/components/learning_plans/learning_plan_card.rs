use model::entities::prelude::LearningPlan;
use model::LikeState;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::use_toast;
use crate::components::avatar::{Avatar, AvatarSize};
use crate::hooks::{like_icon, use_flag_toggle, use_like_toggle};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub plan: LearningPlan,
}

#[function_component(LearningPlanCard)]
pub fn learning_plan_card(props: &Props) -> Html {
    let plan = &props.plan;
    let (likes, on_like) = use_like_toggle(LikeState::new(false, plan.likes), "learning plan");
    let (saved, on_save) = use_flag_toggle(
        false,
        "Learning plan saved to your collection",
        "Learning plan removed from your collection",
    );
    let toast = use_toast();

    let on_share = {
        let title = plan.title.clone();
        Callback::from(move |_| toast.show_info(format!("Share \"{}\" with your friends", title)))
    };

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow overflow-hidden border border-base-200">
            <figure class="relative h-48 w-full overflow-hidden">
                <img
                    src={plan.image_url.clone()}
                    alt={plan.title.clone()}
                    class="h-full w-full object-cover transition-transform duration-300 hover:scale-105"
                />
                <div class="absolute bottom-0 inset-x-0 bg-gradient-to-t from-black/60 to-transparent p-3">
                    <div class="flex justify-between items-center text-white text-xs">
                        <span class="font-medium">
                            <i class="far fa-clock mr-1"></i>
                            {format!("{} \u{2022} {}", plan.duration, plan.difficulty)}
                        </span>
                        <span><i class="fas fa-users mr-1"></i>{plan.participants}</span>
                    </div>
                </div>
            </figure>
            <div class="card-body p-4 gap-2">
                <h3 class="card-title text-lg line-clamp-1">{&plan.title}</h3>
                <p class="text-sm text-base-content/70 line-clamp-2">{&plan.description}</p>
                <Link<Route> to={Route::author_profile(&plan.author.id)} classes="flex items-center gap-2 mt-1">
                    <Avatar name={plan.author.name.clone()} src={plan.author.avatar.clone()} size={AvatarSize::Small} />
                    <span class="text-sm font-medium">{&plan.author.name}</span>
                </Link<Route>>
                <div class="card-actions justify-between items-center mt-2">
                    <div class="flex items-center gap-3">
                        <button class="btn btn-ghost btn-sm gap-1 px-2" aria-label="like" onclick={on_like}>
                            <i class={like_icon(likes.liked)}></i>
                            <span>{likes.count}</span>
                        </button>
                        <span class="flex items-center gap-1 text-sm text-base-content/70">
                            <i class="far fa-comment"></i>{plan.comments}
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

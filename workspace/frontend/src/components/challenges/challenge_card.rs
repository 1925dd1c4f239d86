use model::entities::prelude::{Challenge, ChallengeStatus};
use model::LikeState;
use yew::prelude::*;

use crate::common::toast::use_toast;
use crate::hooks::{like_icon, use_like_toggle};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub challenge: Challenge,
}

pub fn status_badge_class(status: ChallengeStatus) -> &'static str {
    match status {
        ChallengeStatus::Active => "badge-success",
        ChallengeStatus::Upcoming => "badge-info",
        ChallengeStatus::Completed => "badge-neutral",
    }
}

/// Dot color used in the section headers of the challenges page.
pub fn status_dot_class(status: ChallengeStatus) -> &'static str {
    match status {
        ChallengeStatus::Active => "bg-success",
        ChallengeStatus::Upcoming => "bg-info",
        ChallengeStatus::Completed => "bg-neutral",
    }
}

#[function_component(ChallengeCard)]
pub fn challenge_card(props: &Props) -> Html {
    let challenge = &props.challenge;
    let (likes, on_like) = use_like_toggle(LikeState::new(false, challenge.likes), "challenge");
    let toast = use_toast();

    let on_comments = {
        let toast = toast.clone();
        Callback::from(move |_| toast.show_info("Challenge discussions are coming soon".to_string()))
    };
    let on_share = {
        let title = challenge.title.clone();
        Callback::from(move |_| toast.show_info(format!("Share \"{}\" with your friends", title)))
    };

    html! {
        <div class="card bg-base-100 shadow hover:shadow-md transition-shadow overflow-hidden border border-base-200">
            <figure class="relative h-48 w-full overflow-hidden">
                <img
                    src={challenge.image_url.clone()}
                    alt={challenge.title.clone()}
                    class="h-full w-full object-cover transition-transform duration-300 hover:scale-105"
                />
                <div class="absolute top-3 left-3">
                    <span class={classes!("badge", status_badge_class(challenge.status))}>
                        {challenge.status.label()}
                    </span>
                </div>
                <div class="absolute bottom-0 inset-x-0 bg-gradient-to-t from-black/60 to-transparent p-3">
                    <div class="flex justify-between items-center text-white text-xs">
                        <span><i class="fas fa-trophy mr-1"></i>{&challenge.prize}</span>
                        <span><i class="fas fa-users mr-1"></i>{challenge.participants}</span>
                    </div>
                </div>
            </figure>
            <div class="card-body p-4 gap-2">
                <h3 class="card-title text-lg line-clamp-1">{&challenge.title}</h3>
                <p class="text-sm text-base-content/70 line-clamp-2">{&challenge.description}</p>
                <div class="flex justify-between items-center text-xs text-base-content/70 mt-1">
                    <span>
                        <i class="far fa-calendar mr-1"></i>
                        {format!("{} - {}", challenge.start_date, challenge.end_date)}
                    </span>
                    <span>{challenge.entries_label()}</span>
                </div>
                <div class="mt-2">
                    <div class="flex justify-between text-xs mb-1">
                        <span>{"Challenge progress"}</span>
                        <span>{format!("{}%", challenge.progress)}</span>
                    </div>
                    <progress class="progress progress-primary w-full h-1" value={challenge.progress.to_string()} max="100"></progress>
                </div>
                <div class="card-actions justify-between items-center mt-2">
                    <div class="flex items-center gap-3">
                        <button class="btn btn-ghost btn-sm gap-1 px-2" aria-label="like" onclick={on_like}>
                            <i class={like_icon(likes.liked)}></i>
                            <span>{likes.count}</span>
                        </button>
                        <button class="btn btn-ghost btn-sm gap-1 px-2" aria-label="comments" onclick={on_comments}>
                            <i class="far fa-comment"></i>
                            <span>{challenge.comments}</span>
                        </button>
                    </div>
                    <button class="btn btn-ghost btn-sm btn-square" aria-label="share" onclick={on_share}>
                        <i class="fas fa-share-alt"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}

use model::entities::prelude::Profile;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::use_toast;
use crate::components::avatar::{Avatar, AvatarSize};
use crate::hooks::use_flag_toggle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub profile: Profile,
    /// The signed-in user's own page gets edit links instead of Follow.
    #[prop_or_default]
    pub is_own: bool,
}

#[function_component(ProfileHeader)]
pub fn profile_header(props: &Props) -> Html {
    let profile = &props.profile;
    let (following, on_follow) = use_flag_toggle(
        false,
        "You are now following this cook",
        "You unfollowed this cook",
    );
    let toast = use_toast();

    let on_message = {
        let name = profile.name.clone();
        Callback::from(move |_| toast.show_info(format!("Messaging {} is coming soon", name)))
    };

    let actions = if props.is_own {
        html! {
            <div class="flex gap-2">
                <Link<Route> to={Route::ProfileEdit} classes="btn btn-outline btn-sm">
                    <i class="fas fa-cog mr-1"></i>{"Settings"}
                </Link<Route>>
                <Link<Route> to={Route::ProfileEdit} classes="btn btn-outline btn-sm">
                    <i class="fas fa-edit mr-1"></i>{"Edit Profile"}
                </Link<Route>>
            </div>
        }
    } else {
        html! {
            <div class="flex gap-2">
                <button
                    class={classes!("btn", "btn-sm", if following { "btn-outline" } else { "btn-primary" })}
                    onclick={on_follow}
                >
                    {if following { "Following" } else { "Follow" }}
                </button>
                <button class="btn btn-outline btn-sm" onclick={on_message}>
                    <i class="far fa-comment-dots mr-1"></i>{"Message"}
                </button>
            </div>
        }
    };

    html! {
        <div class="flex flex-col md:flex-row gap-6 items-center md:items-start">
            <Avatar name={profile.name.clone()} src={profile.avatar.clone()} size={AvatarSize::Large} />
            <div class="flex-1 space-y-2 text-center md:text-left">
                <h1 class="text-2xl font-bold">{&profile.name}</h1>
                if let Some(bio) = &profile.bio {
                    <p class="text-base-content/70">{bio}</p>
                }
                <div class="flex flex-wrap gap-3 justify-center md:justify-start text-sm text-base-content/70">
                    if let Some(location) = &profile.location {
                        <span><i class="fas fa-map-marker-alt mr-1"></i>{location}</span>
                    }
                    if let (Some(website), Some(label)) = (&profile.website, profile.website_label()) {
                        <span>
                            <i class="fas fa-globe mr-1"></i>
                            <a href={website.clone()} target="_blank" rel="noopener noreferrer" class="link link-hover">{label}</a>
                        </span>
                    }
                    <span><i class="fas fa-birthday-cake mr-1"></i>{format!("Joined {}", profile.join_date)}</span>
                </div>
                <div class="flex flex-wrap gap-4 justify-center md:justify-start">
                    <span><i class="fas fa-utensils mr-1"></i><b>{profile.recipes_count}</b>{" recipes"}</span>
                    <span><i class="fas fa-users mr-1"></i><b>{profile.followers_count}</b>{" followers"}</span>
                    <span><i class="far fa-user mr-1"></i><b>{profile.following_count}</b>{" following"}</span>
                </div>
            </div>
            {actions}
        </div>
    }
}

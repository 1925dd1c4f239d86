use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::store::use_store;
use crate::common::toast::use_toast;
use crate::components::avatar::{Avatar, AvatarSize};
use crate::pages::recipes::SearchQuery;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let store = use_store();
    let toast = use_toast();
    let navigator = use_navigator();
    let user = store.current_user();

    let on_search = {
        let navigator = navigator.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            let input: HtmlInputElement = e.target_unchecked_into();
            let q = input.value().trim().to_string();
            log::info!("Searching recipes for: '{}'", q);
            if let Some(navigator) = &navigator {
                if let Err(err) = navigator.push_with_query(&Route::Recipes, &SearchQuery { q }) {
                    log::error!("Could not navigate to search results: {}", err);
                }
            }
        })
    };

    let on_notifications = {
        let toast = toast.clone();
        Callback::from(move |_| toast.show_info("You have no new notifications.".to_string()))
    };

    let on_messages = {
        let toast = toast.clone();
        Callback::from(move |_| toast.show_info("Messages are not available yet.".to_string()))
    };

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            log::info!("User logged out");
            toast.show_success("You have been logged out.".to_string());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let on_toggle = {
        let on_toggle_sidebar = props.on_toggle_sidebar.clone();
        Callback::from(move |_| on_toggle_sidebar.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0 gap-2">
            <div class="flex-none lg:hidden">
                <button aria-label="toggle sidebar" class="btn btn-square btn-ghost" onclick={on_toggle}>
                    <i class="fas fa-bars text-xl"></i>
                </button>
            </div>
            <div class="flex-none px-2">
                <Link<Route> to={Route::Home} classes="flex items-center gap-2 text-xl font-bold text-primary">
                    <i class="fas fa-utensils"></i>
                    <span class="hidden sm:inline">{"CulinaryCraft"}</span>
                </Link<Route>>
            </div>
            <div class="flex-1 px-2">
                <label class="input input-bordered input-sm hidden md:flex items-center gap-2 w-full max-w-md">
                    <i class="fas fa-search text-base-content/50"></i>
                    <input type="search" class="grow" placeholder="Search recipes..." onkeypress={on_search} />
                </label>
            </div>
            <div class="flex-none flex items-center gap-2">
                <Link<Route> to={Route::CreateRecipe} classes="btn btn-primary btn-sm hidden sm:inline-flex">
                    <i class="fas fa-plus"></i>{" New Recipe"}
                </Link<Route>>
                <button class="btn btn-ghost btn-circle" aria-label="notifications" onclick={on_notifications}>
                    <i class="far fa-bell text-lg"></i>
                </button>
                <div class="dropdown dropdown-end">
                    <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                        <Avatar name={user.name.clone()} src={user.avatar.clone()} size={AvatarSize::Small} />
                    </div>
                    <ul tabindex="0" class="menu menu-sm dropdown-content bg-base-100 rounded-box z-50 mt-3 w-52 p-2 shadow">
                        <li class="menu-title">{&user.name}</li>
                        <li><Link<Route> to={Route::Profile}><i class="far fa-user w-4"></i>{"Profile"}</Link<Route>></li>
                        <li><Link<Route> to={Route::ProfileEdit}><i class="fas fa-cog w-4"></i>{"Settings"}</Link<Route>></li>
                        <li><a onclick={on_messages}><i class="far fa-envelope w-4"></i>{"Messages"}</a></li>
                        <div class="divider my-1"></div>
                        <li><a onclick={on_logout}><i class="fas fa-sign-out-alt w-4"></i>{"Log out"}</a></li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

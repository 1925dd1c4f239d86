use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::recipes::SearchQuery;
use crate::Route;

const TRENDING_TAGS: [&str; 4] = ["breakfast", "quickmeals", "desserts", "healthy"];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let current = use_route::<Route>();
    let nav_class = |route: &Route| {
        let active = current.as_ref() == Some(route);
        classes!("nav-link", active.then_some("active"))
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <>
            if props.open {
                <div class="fixed inset-0 bg-black/40 z-30 lg:hidden" onclick={on_close.clone()}></div>
            }
            <aside class={classes!(
                "fixed", "lg:static", "inset-y-0", "left-0", "z-40", "w-64", "bg-base-100",
                "border-r", "border-base-300", "transition-transform", "duration-300", "lg:translate-x-0",
                if props.open { "translate-x-0" } else { "-translate-x-full" }
            )}>
                <ul class="menu p-4 gap-1" onclick={on_close}>
                    <li><Link<Route> to={Route::Home} classes={nav_class(&Route::Home)}><i class="fas fa-home w-5"></i>{"Home"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Recipes} classes={nav_class(&Route::Recipes)}><i class="fas fa-book-open w-5"></i>{"Recipes"}</Link<Route>></li>
                    <li><Link<Route> to={Route::LearningPlans} classes={nav_class(&Route::LearningPlans)}><i class="fas fa-graduation-cap w-5"></i>{"Learning Plans"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Challenges} classes={nav_class(&Route::Challenges)}><i class="fas fa-trophy w-5"></i>{"Cooking Challenges"}</Link<Route>></li>

                    <div class="divider"></div>

                    <li class="menu-title">{"Trending tags"}</li>
                    { for TRENDING_TAGS.iter().map(|tag| html! {
                        <li key={*tag}>
                            <Link<Route, SearchQuery> to={Route::Recipes} query={Some(SearchQuery { q: tag.to_string() })}>
                                <i class="fas fa-hashtag w-5 text-primary"></i>{*tag}
                            </Link<Route, SearchQuery>>
                        </li>
                    }) }
                </ul>
            </aside>
        </>
    }
}

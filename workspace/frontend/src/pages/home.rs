use compute::{load_more, FeedOrder};
use model::entities::prelude::Recipe;
use yew::prelude::*;

use crate::api_client::recipe::get_feed;
use crate::common::empty_state::EmptyState;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::store::use_store;
use crate::components::recipes::RecipeCard;
use crate::settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeTab {
    Feed(FeedOrder),
    Challenges,
}

impl HomeTab {
    const ALL: [HomeTab; 4] = [
        HomeTab::Feed(FeedOrder::Trending),
        HomeTab::Feed(FeedOrder::Recent),
        HomeTab::Feed(FeedOrder::Popular),
        HomeTab::Challenges,
    ];

    fn label(&self) -> &'static str {
        match self {
            HomeTab::Feed(order) => order.label(),
            HomeTab::Challenges => "Challenges",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            HomeTab::Feed(FeedOrder::Trending) => "fas fa-chart-line",
            HomeTab::Feed(FeedOrder::Recent) => "far fa-clock",
            HomeTab::Feed(FeedOrder::Popular) => "fas fa-fire",
            HomeTab::Challenges => "fas fa-award",
        }
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let store = use_store();
    let (feed_state, refetch) = use_fetch_with_refetch((), move |_| get_feed(store.clone()));

    let on_retry = Callback::from(move |_| refetch.emit(()));
    let render = Callback::from(|source: Vec<Recipe>| html! { <Feed {source} /> });

    html! {
        <div class="container max-w-6xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold">{"Discover Recipes"}</h1>
            <FetchRender<Vec<Recipe>>
                state={(*feed_state).clone()}
                {render}
                on_retry={Some(on_retry)}
                loading_text={Some(AttrValue::from("Loading recipes..."))}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeedProps {
    source: Vec<Recipe>,
}

#[function_component(Feed)]
fn feed(props: &FeedProps) -> Html {
    let active = use_state(|| HomeTab::Feed(FeedOrder::Trending));
    let recipes = use_state(|| props.source.clone());
    let loading_more = use_state(|| false);

    let on_load_more = {
        let recipes = recipes.clone();
        let loading_more = loading_more.clone();
        let source = props.source.clone();
        Callback::from(move |_| {
            if *loading_more {
                return;
            }
            let recipes = recipes.clone();
            let loading_more = loading_more.clone();
            let source = source.clone();
            loading_more.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let app_settings = settings::get_settings();
                gloo_timers::future::TimeoutFuture::new(app_settings.submit_delay_ms).await;
                let next = load_more(&recipes, &source, app_settings.load_more_batch);
                log::debug!("Feed grew from {} to {} recipes", recipes.len(), next.len());
                recipes.set(next);
                loading_more.set(false);
            });
        })
    };

    let tab_button = |tab: HomeTab| {
        let active = active.clone();
        let is_active = *active == tab;
        html! {
            <a
                role="tab"
                class={classes!("tab", "gap-2", is_active.then_some("tab-active"))}
                onclick={Callback::from(move |_| active.set(tab))}
            >
                <i class={tab.icon()}></i>{tab.label()}
            </a>
        }
    };

    let grid = |items: Vec<Recipe>| {
        html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                // Load more repeats records, so ids are not unique keys.
                { for items.into_iter().enumerate().map(|(index, recipe)| html! {
                    <RecipeCard key={format!("{}-{}", index, recipe.id)} recipe={recipe.clone()} />
                }) }
            </div>
        }
    };

    let content = match *active {
        HomeTab::Feed(FeedOrder::Trending) => html! {
            <>
                {grid((*recipes).clone())}
                <div class="mt-8 text-center">
                    <button class="btn btn-primary" onclick={on_load_more} disabled={*loading_more}>
                        {if *loading_more { "Loading..." } else { "Load More" }}
                    </button>
                </div>
            </>
        },
        HomeTab::Feed(order) => grid(order.apply(&recipes)),
        HomeTab::Challenges => html! {
            <EmptyState
                title="No Active Challenges"
                message={Some("Check back soon for new cooking challenges!".to_string())}
                icon="fas fa-award"
            />
        },
    };

    html! {
        <div class="space-y-4">
            <div role="tablist" class="tabs tabs-boxed w-fit">
                { for HomeTab::ALL.into_iter().map(tab_button) }
            </div>
            {content}
        </div>
    }
}

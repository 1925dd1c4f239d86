use compute::partition_by_status;
use model::entities::prelude::Challenge;
use yew::prelude::*;

use crate::api_client::challenge::get_challenges;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::{CardGrid, FetchRender};
use crate::common::store::use_store;
use crate::common::toast::use_toast;
use crate::components::challenges::challenge_card::status_dot_class;
use crate::components::challenges::ChallengeCard;

#[function_component(ChallengesPage)]
pub fn challenges_page() -> Html {
    let store = use_store();
    let toast = use_toast();
    let (state, refetch) = use_fetch_with_refetch((), move |_| get_challenges(store.clone()));

    let on_create = Callback::from(move |_| toast.show_info("Creating challenges is coming soon".to_string()));

    let render = Callback::from(|challenges: Vec<Challenge>| {
        let partition = partition_by_status(&challenges);
        html! {
            <div class="space-y-8">
                { for partition.sections().map(|(status, items)| html! {
                    <section key={status.label()} class="space-y-4">
                        <h2 class="text-2xl font-semibold flex items-center gap-2">
                            <span class={classes!("w-3", "h-3", "rounded-full", status_dot_class(status))}></span>
                            {format!("{} Challenges", status.label())}
                        </h2>
                        <CardGrid<Challenge>
                            items={items.to_vec()}
                            render_item={Callback::from(|challenge: Challenge| html! {
                                <ChallengeCard key={challenge.id.clone()} challenge={challenge.clone()} />
                            })}
                            empty_title={format!("No {} challenges", status.label().to_lowercase())}
                        />
                    </section>
                }) }
            </div>
        }
    });

    html! {
        <div class="container max-w-6xl mx-auto space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{"Cooking Challenges"}</h1>
                <button class="btn btn-primary" onclick={on_create}>
                    <i class="fas fa-trophy mr-2"></i>{"Create Challenge"}
                </button>
            </div>
            <FetchRender<Vec<Challenge>>
                state={(*state).clone()}
                {render}
                on_retry={Some(Callback::from(move |_| refetch.emit(())))}
                loading_text={Some(AttrValue::from("Loading challenges..."))}
            />
        </div>
    }
}

use compute::DifficultyTab;
use model::entities::prelude::LearningPlan;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::learning_plan::get_learning_plans;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::{CardGrid, FetchRender};
use crate::common::store::use_store;
use crate::components::learning_plans::LearningPlanCard;
use crate::Route;

#[function_component(LearningPlansPage)]
pub fn learning_plans_page() -> Html {
    let store = use_store();
    let active = use_state(DifficultyTab::default);
    let (state, refetch) = use_fetch_with_refetch((), move |_| get_learning_plans(store.clone()));

    let render = {
        let tab = *active;
        Callback::from(move |plans: Vec<LearningPlan>| {
            html! {
                <CardGrid<LearningPlan>
                    items={tab.apply(&plans)}
                    render_item={Callback::from(|plan: LearningPlan| html! { <LearningPlanCard key={plan.id.clone()} plan={plan.clone()} /> })}
                    empty_title="No learning plans here yet"
                    empty_message={Some(format!("Nobody has published a {} plan so far.", tab.label().to_lowercase()))}
                />
            }
        })
    };

    html! {
        <div class="container max-w-6xl mx-auto space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{"Learning Plans"}</h1>
                <Link<Route> to={Route::CreateLearningPlan} classes="btn btn-primary">
                    <i class="fas fa-graduation-cap mr-2"></i>{"Create Plan"}
                </Link<Route>>
            </div>
            <div role="tablist" class="tabs tabs-boxed w-fit">
                { for DifficultyTab::ALL.into_iter().map(|tab| {
                    let active = active.clone();
                    html! {
                        <a
                            role="tab"
                            class={classes!("tab", (*active == tab).then_some("tab-active"))}
                            onclick={Callback::from(move |_| active.set(tab))}
                        >
                            {tab.label()}
                        </a>
                    }
                }) }
            </div>
            <FetchRender<Vec<LearningPlan>>
                state={(*state).clone()}
                {render}
                on_retry={Some(Callback::from(move |_| refetch.emit(())))}
            />
        </div>
    }
}

use model::entities::prelude::{Difficulty, PlanDuration};
use model::forms::LearningPlanDraft;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::learning_plan::create_learning_plan;
use crate::common::input::event_value;
use crate::common::loading::ButtonSpinner;
use crate::common::store::use_store;
use crate::common::toast::{use_toast, ToastType};
use crate::settings;
use crate::Route;

#[function_component(CreateLearningPlanPage)]
pub fn create_learning_plan_page() -> Html {
    let draft = use_state(LearningPlanDraft::new);
    // Set once the preview of the current URL failed to load.
    let image_failed = use_state(|| false);
    let is_submitting = use_state(|| false);
    let store = use_store();
    let toast = use_toast();
    let navigator = use_navigator();

    let edit = |apply: fn(&mut LearningPlanDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            apply(&mut next, event_value(&e));
            draft.set(next);
        })
    };
    let on_title = edit(|d, v| d.title = v);
    let on_description = edit(|d, v| d.description = v);

    let on_image_url = {
        let draft = draft.clone();
        let image_failed = image_failed.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            next.image_url = event_value(&e);
            draft.set(next);
            image_failed.set(false);
        })
    };

    let on_duration = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            next.duration = event_value(&e).parse::<PlanDuration>().ok();
            draft.set(next);
        })
    };

    let on_difficulty = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let mut next = (*draft).clone();
            next.difficulty = event_value(&e).parse::<Difficulty>().ok();
            draft.set(next);
        })
    };

    let on_image_error = {
        let image_failed = image_failed.clone();
        let toast = toast.clone();
        Callback::from(move |_: Event| {
            if *image_failed {
                return;
            }
            log::warn!("Cover image preview failed to load, showing placeholder");
            image_failed.set(true);
            toast.show_info("Invalid image URL. Using placeholder instead.".to_string());
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::LearningPlans);
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = match draft.submit() {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("Learning plan form rejected: {}", err);
                    toast.show(
                        ToastType::Error,
                        Some("Missing information"),
                        "Please fill in all required fields.".to_string(),
                    );
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let store = store.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = create_learning_plan(store, request).await;
                is_submitting.set(false);
                match result {
                    Ok(()) => {
                        toast.show(
                            ToastType::Success,
                            Some("Learning plan created!"),
                            "Your learning plan has been published successfully.".to_string(),
                        );
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::LearningPlans);
                        }
                    }
                    Err(err) => toast.show_error(format!("Failed to create learning plan: {}", err)),
                }
            });
        })
    };

    let busy = *is_submitting;
    let preview_src = if *image_failed {
        settings::get_settings().placeholder_image_url
    } else {
        draft.image_url.trim().to_string()
    };
    let selected_duration = draft.duration.map(|d| d.value()).unwrap_or_default();
    let selected_difficulty = draft.difficulty.map(|d| d.label()).unwrap_or_default();

    html! {
        <div class="container max-w-3xl mx-auto space-y-6">
            <div class="flex items-center gap-2">
                <button type="button" class="btn btn-ghost btn-sm" onclick={on_back}>
                    <i class="fas fa-arrow-left mr-1"></i>{"Back"}
                </button>
                <h1 class="text-3xl font-bold flex items-center gap-2">
                    <i class="fas fa-graduation-cap"></i>{"Create Learning Plan"}
                </h1>
            </div>

            <form onsubmit={on_submit} class="card bg-base-100 shadow">
                <div class="card-body space-y-4">
                    <div class="form-control">
                        <label class="label" for="title"><span class="label-text">{"Title *"}</span></label>
                        <input id="title" type="text" class="input input-bordered w-full"
                            placeholder="Enter a catchy title for your learning plan"
                            value={draft.title.clone()} oninput={on_title} disabled={busy} />
                    </div>

                    <div class="form-control">
                        <label class="label" for="description"><span class="label-text">{"Description *"}</span></label>
                        <textarea id="description" class="textarea textarea-bordered w-full" rows="4"
                            placeholder="Describe what learners will achieve with this plan"
                            value={draft.description.clone()} oninput={on_description} disabled={busy} />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="duration"><span class="label-text">{"Duration *"}</span></label>
                            <select id="duration" class="select select-bordered w-full" onchange={on_duration} disabled={busy}>
                                <option value="" selected={selected_duration.is_empty()} disabled=true>{"Select duration"}</option>
                                { for PlanDuration::ALL.iter().map(|d| html! {
                                    <option value={d.value()} selected={selected_duration == d.value()}>{d.label()}</option>
                                }) }
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="difficulty"><span class="label-text">{"Difficulty Level *"}</span></label>
                            <select id="difficulty" class="select select-bordered w-full" onchange={on_difficulty} disabled={busy}>
                                <option value="" selected={selected_difficulty.is_empty()} disabled=true>{"Select difficulty"}</option>
                                { for Difficulty::ALL.iter().map(|d| html! {
                                    <option value={d.label()} selected={selected_difficulty == d.label()}>{d.label()}</option>
                                }) }
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="image"><span class="label-text">{"Cover Image URL (optional)"}</span></label>
                        <input id="image" type="text" class="input input-bordered w-full" placeholder="Enter image URL"
                            value={draft.image_url.clone()} oninput={on_image_url} disabled={busy} />
                        if !draft.image_url.trim().is_empty() {
                            <div class="mt-2 h-48 w-full overflow-hidden rounded-box">
                                <img src={preview_src} alt="Cover preview" class="h-full w-full object-cover" onerror={on_image_error} />
                            </div>
                        }
                    </div>

                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary" disabled={busy}>
                            if busy {
                                <ButtonSpinner />{" Creating..."}
                            } else {
                                {"Create Learning Plan"}
                            }
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}

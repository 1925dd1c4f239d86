use model::entities::prelude::RecipeCategory;
use model::forms::{EntryList, RecipeChange, RecipeDraft};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::recipe::{create_recipe, update_recipe};
use crate::common::form_draft::use_form_draft;
use crate::common::input::event_value;
use crate::common::loading::ButtonSpinner;
use crate::common::store::use_store;
use crate::common::toast::{use_toast, ToastType};
use crate::components::image_picker::{ImagePicker, PickedImage};
use crate::Route;
use super::ingredients_input::IngredientsInput;
use super::steps_input::StepsInput;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Blank for a new recipe, prefilled from a recipe when editing.
    #[prop_or_default]
    pub initial: RecipeDraft,
}

#[function_component(RecipeForm)]
pub fn recipe_form(props: &Props) -> Html {
    let initial = props.initial.clone();
    let draft = use_form_draft(move || initial);
    let tag_input = use_state(String::new);
    let is_submitting = use_state(|| false);
    let store = use_store();
    let toast = use_toast();
    let navigator = use_navigator();

    let edit = |change: fn(String) -> RecipeChange| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| draft.dispatch(change(event_value(&e))))
    };
    let on_title = edit(RecipeChange::Title);
    let on_description = edit(RecipeChange::Description);
    let on_cooking_time = edit(RecipeChange::CookingTime);

    let on_category = {
        let draft = draft.clone();
        let toast = toast.clone();
        Callback::from(move |e: Event| {
            let value = event_value(&e);
            let category = if value.is_empty() {
                None
            } else {
                match value.parse::<RecipeCategory>() {
                    Ok(category) => Some(category),
                    Err(err) => {
                        toast.show_error(err.to_string());
                        None
                    }
                }
            };
            draft.dispatch(RecipeChange::Category(category));
        })
    };

    let on_ingredients = {
        let draft = draft.clone();
        Callback::from(move |list: EntryList| draft.dispatch(RecipeChange::Ingredients(list)))
    };

    let on_steps = {
        let draft = draft.clone();
        Callback::from(move |list: EntryList| draft.dispatch(RecipeChange::Steps(list)))
    };

    let on_pick_image = {
        let draft = draft.clone();
        Callback::from(move |image: PickedImage| {
            draft.dispatch(RecipeChange::Image(Some(image.data_url)))
        })
    };

    let on_clear_image = {
        let draft = draft.clone();
        Callback::from(move |_| draft.dispatch(RecipeChange::Image(None)))
    };

    let on_tag_input = {
        let tag_input = tag_input.clone();
        Callback::from(move |e: InputEvent| tag_input.set(event_value(&e)))
    };

    let on_tag_key = {
        let draft = draft.clone();
        let tag_input = tag_input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            // Enter adds a tag instead of submitting the form.
            e.prevent_default();
            draft.dispatch(RecipeChange::AddTag((*tag_input).clone()));
            tag_input.set(String::new());
        })
    };

    let on_remove_tag = {
        let draft = draft.clone();
        move |tag: String| {
            let draft = draft.clone();
            Callback::from(move |_| draft.dispatch(RecipeChange::RemoveTag(tag.clone())))
        }
    };

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();
        let store = store.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let request = match draft.submit() {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("Recipe form rejected: {}", err);
                    toast.show(ToastType::Error, Some("Error"), err.to_string());
                    return;
                }
            };

            let recipe_id = draft.recipe_id.clone();
            let is_submitting = is_submitting.clone();
            let store = store.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match &recipe_id {
                    Some(id) => update_recipe(store, id.clone(), request).await,
                    None => create_recipe(store, request).await,
                };
                is_submitting.set(false);
                match (result, recipe_id) {
                    (Ok(()), Some(id)) => {
                        toast.show(
                            ToastType::Success,
                            Some("Recipe Updated"),
                            "Your recipe has been updated successfully.".to_string(),
                        );
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Recipe { id });
                        }
                    }
                    (Ok(()), None) => {
                        toast.show(
                            ToastType::Success,
                            Some("Recipe Created"),
                            "Your recipe has been created successfully.".to_string(),
                        );
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    (Err(err), _) => toast.show_error(format!("Failed to save recipe: {}", err)),
                }
            });
        })
    };

    let busy = *is_submitting;
    let selected_category = draft.category.map(|c| c.value()).unwrap_or_default();

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="md:col-span-2 space-y-4">
                    <div class="form-control">
                        <label class="label" for="title">
                            <span class="label-text">{"Recipe Title "}<span class="text-error">{"*"}</span></span>
                        </label>
                        <input
                            id="title"
                            type="text"
                            class="input input-bordered w-full"
                            placeholder="Enter a descriptive title"
                            value={draft.title.clone()}
                            oninput={on_title}
                            disabled={busy}
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="description">
                            <span class="label-text">{"Description "}<span class="text-error">{"*"}</span></span>
                        </label>
                        <textarea
                            id="description"
                            class="textarea textarea-bordered w-full"
                            rows="3"
                            placeholder="Tell us about your recipe"
                            value={draft.description.clone()}
                            oninput={on_description}
                            disabled={busy}
                        />
                    </div>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="cooking-time">
                                <span class="label-text">{"Cooking Time "}<span class="text-error">{"*"}</span></span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <i class="far fa-clock text-base-content/50"></i>
                                <input
                                    id="cooking-time"
                                    type="text"
                                    class="grow"
                                    placeholder="e.g. 30 mins"
                                    value={draft.cooking_time.clone()}
                                    oninput={on_cooking_time}
                                    disabled={busy}
                                />
                            </label>
                        </div>
                        <div class="form-control">
                            <label class="label" for="category">
                                <span class="label-text">{"Category "}<span class="text-error">{"*"}</span></span>
                            </label>
                            <select id="category" class="select select-bordered w-full" onchange={on_category} disabled={busy}>
                                <option value="" selected={selected_category.is_empty()} disabled=true>{"Select a category"}</option>
                                { for RecipeCategory::ALL.iter().map(|c| html! {
                                    <option value={c.value()} selected={selected_category == c.value()}>{c.label()}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                </div>

                <div class="form-control">
                    <label class="label"><span class="label-text">{"Recipe Image"}</span></label>
                    <ImagePicker
                        preview={draft.image.clone()}
                        on_pick={on_pick_image}
                        on_clear={Some(on_clear_image)}
                        label="Click to upload an image"
                        disabled={busy}
                    />
                </div>
            </div>

            <div class="form-control">
                <label class="label">
                    <span class="label-text">{"Ingredients "}<span class="text-error">{"*"}</span></span>
                </label>
                <IngredientsInput ingredients={draft.ingredients.clone()} on_change={on_ingredients} disabled={busy} />
            </div>

            <div class="form-control">
                <label class="label">
                    <span class="label-text">{"Instructions "}<span class="text-error">{"*"}</span></span>
                </label>
                <StepsInput steps={draft.steps.clone()} on_change={on_steps} disabled={busy} />
            </div>

            <div class="form-control">
                <label class="label" for="tags"><span class="label-text">{"Tags"}</span></label>
                <div class="flex flex-wrap gap-2 mb-2">
                    { for draft.tags.iter().map(|tag| html! {
                        <span key={tag.clone()} class="badge badge-secondary gap-1 py-3">
                            {tag}
                            <button type="button" aria-label={format!("remove tag {}", tag)} onclick={on_remove_tag(tag.clone())} disabled={busy}>
                                <i class="fas fa-times text-xs"></i>
                            </button>
                        </span>
                    }) }
                </div>
                <input
                    id="tags"
                    type="text"
                    class="input input-bordered w-full"
                    placeholder="Type a tag and press Enter"
                    value={(*tag_input).clone()}
                    oninput={on_tag_input}
                    onkeydown={on_tag_key}
                    disabled={busy}
                />
            </div>

            <div class="flex justify-end gap-2">
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    if busy {
                        <ButtonSpinner />{" Saving..."}
                    } else if draft.is_edit() {
                        {"Update Recipe"}
                    } else {
                        {"Publish Recipe"}
                    }
                </button>
            </div>
        </form>
    }
}

use common::AvatarUpload;
use model::entities::prelude::Profile;
use model::forms::{ProfileChange, ProfileDraft};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::profile::update_profile;
use crate::common::form_draft::use_form_draft;
use crate::common::input::event_value;
use crate::common::loading::ButtonSpinner;
use crate::common::store::use_store;
use crate::common::toast::{use_toast, ToastType};
use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::image_picker::{ImagePicker, PickedImage};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub profile: Profile,
}

/// Edit form for the signed-in user's profile.
#[function_component(ProfileEdit)]
pub fn profile_edit(props: &Props) -> Html {
    let profile = props.profile.clone();
    let draft = use_form_draft(move || ProfileDraft::from_profile(&profile));
    let is_submitting = use_state(|| false);
    let store = use_store();
    let toast = use_toast();
    let navigator = use_navigator();

    let edit = |change: fn(String) -> ProfileChange| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| draft.dispatch(change(event_value(&e))))
    };
    let on_name = edit(ProfileChange::Name);
    let on_bio = edit(ProfileChange::Bio);
    let on_location = edit(ProfileChange::Location);
    let on_website = edit(ProfileChange::Website);

    let on_pick_avatar = {
        let draft = draft.clone();
        Callback::from(move |image: PickedImage| {
            draft.dispatch(ProfileChange::Avatar(AvatarUpload {
                file_name: image.file_name,
                data_url: image.data_url,
            }))
        })
    };

    let on_remove_avatar = {
        let draft = draft.clone();
        Callback::from(move |_| draft.dispatch(ProfileChange::RemoveAvatar))
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Profile);
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
                    log::warn!("Profile form rejected: {}", err);
                    toast.show(ToastType::Error, Some("Error"), err.to_string());
                    return;
                }
            };

            let is_submitting = is_submitting.clone();
            let store = store.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = update_profile(store, request).await;
                is_submitting.set(false);
                match result {
                    Ok(()) => {
                        toast.show(
                            ToastType::Success,
                            Some("Profile Updated"),
                            "Your profile has been updated successfully.".to_string(),
                        );
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Profile);
                        }
                    }
                    Err(err) => toast.show_error(format!("Failed to update profile: {}", err)),
                }
            });
        })
    };

    let busy = *is_submitting;
    let email = props.profile.email.clone().unwrap_or_default();

    html! {
        <form onsubmit={on_submit} class="space-y-6 max-w-2xl mx-auto">
            <div class="form-control">
                <label class="label"><span class="label-text">{"Profile Picture"}</span></label>
                <div class="flex items-center gap-6">
                    <Avatar name={draft.name.clone()} src={draft.avatar_preview.clone()} size={AvatarSize::Large} />
                    <div class="flex-1 space-y-2">
                        <p class="text-sm text-base-content/70">{"Upload a new profile picture"}</p>
                        <ImagePicker on_pick={on_pick_avatar} label="Upload Image" disabled={busy} />
                        if draft.avatar_preview.is_some() {
                            <button type="button" class="btn btn-outline btn-sm" onclick={on_remove_avatar} disabled={busy}>
                                <i class="fas fa-times mr-1"></i>{"Remove"}
                            </button>
                        }
                    </div>
                </div>
            </div>

            <div class="form-control">
                <label class="label" for="name"><span class="label-text">{"Name"}</span></label>
                <input id="name" type="text" class="input input-bordered w-full" placeholder="Your name"
                    value={draft.name.clone()} oninput={on_name} disabled={busy} />
            </div>

            <div class="form-control">
                <label class="label" for="email"><span class="label-text">{"Email"}</span></label>
                <input id="email" type="email" class="input input-bordered w-full bg-base-200" value={email} disabled=true />
                <label class="label">
                    <span class="label-text-alt">{"Email cannot be changed. Contact support if you need to update it."}</span>
                </label>
            </div>

            <div class="form-control">
                <label class="label" for="bio"><span class="label-text">{"Bio"}</span></label>
                <textarea id="bio" class="textarea textarea-bordered w-full" rows="3"
                    placeholder="Tell us a little about yourself"
                    value={draft.bio.clone()} oninput={on_bio} disabled={busy} />
            </div>

            <div class="form-control">
                <label class="label" for="location"><span class="label-text">{"Location"}</span></label>
                <input id="location" type="text" class="input input-bordered w-full" placeholder="e.g., New York, USA"
                    value={draft.location.clone()} oninput={on_location} disabled={busy} />
            </div>

            <div class="form-control">
                <label class="label" for="website"><span class="label-text">{"Website"}</span></label>
                <input id="website" type="text" class="input input-bordered w-full" placeholder="e.g., https://yourwebsite.com"
                    value={draft.website.clone()} oninput={on_website} disabled={busy} />
            </div>

            <div class="flex justify-end gap-3">
                <button type="button" class="btn btn-outline" onclick={on_cancel} disabled={busy}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    if busy {
                        <ButtonSpinner />{" Saving..."}
                    } else {
                        {"Save Changes"}
                    }
                </button>
            </div>
        </form>
    }
}

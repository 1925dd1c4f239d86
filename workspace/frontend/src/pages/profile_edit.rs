use model::entities::prelude::Profile;
use yew::prelude::*;

use crate::api_client::profile::get_profile;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::common::store::use_store;
use crate::components::profile::ProfileEdit;

#[function_component(ProfileEditPage)]
pub fn profile_edit_page() -> Html {
    let store = use_store();
    let (state, refetch) = use_fetch_with_refetch((), move |_| get_profile(store.clone(), None));

    let render = Callback::from(|profile: Profile| html! { <ProfileEdit {profile} /> });

    html! {
        <div class="container max-w-4xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{"Edit Profile"}</h1>
                <p class="text-base-content/70 mt-1">{"Update your personal information and profile picture"}</p>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <FetchRender<Profile>
                        state={(*state).clone()}
                        {render}
                        on_retry={Some(Callback::from(move |_| refetch.emit(())))}
                    />
                </div>
            </div>
        </div>
    }
}

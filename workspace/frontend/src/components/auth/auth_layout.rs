use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Photo shown in the right column on wide screens.
    pub image_url: AttrValue,
    pub children: Children,
}

/// Two-column shell of the sign-in and sign-up pages.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &Props) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <div class="flex-1 flex flex-col md:flex-row">
                <div class="w-full md:w-1/2 flex flex-col items-center justify-center p-8">
                    <Link<Route> to={Route::Landing} classes="flex items-center gap-2 mb-8">
                        <i class="fas fa-utensils text-primary text-3xl"></i>
                        <span class="text-2xl font-bold">{"CulinaryCraft"}</span>
                    </Link<Route>>
                    { for props.children.iter() }
                </div>
                <div class="hidden md:block md:w-1/2 bg-base-200">
                    <img src={props.image_url.clone()} alt="Cooking" class="w-full h-full object-cover" />
                </div>
            </div>
            <footer class="text-center py-4 text-sm text-base-content/60">
                {format!("\u{a9} {} CulinaryCraft. All rights reserved.", year)}
            </footer>
        </div>
    }
}

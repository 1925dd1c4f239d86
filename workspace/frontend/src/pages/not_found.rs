use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    if let Some(location) = use_location() {
        log::warn!("No route for path: {}", location.path());
    }

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-base-200 text-center p-6">
            <h1 class="text-6xl font-bold text-primary">{"404"}</h1>
            <p class="text-xl">{"Oops! This page went missing from the menu."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                <i class="fas fa-home mr-2"></i>{"Back to Home"}
            </Link<Route>>
        </div>
    }
}

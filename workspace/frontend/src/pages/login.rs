use model::forms::AuthMode;
use yew::prelude::*;

use crate::components::auth::{AuthLayout, CredentialsForm};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! {
        <AuthLayout image_url="https://images.unsplash.com/photo-1556911220-bff31c812dba?auto=format&q=75&fit=crop&w=1000">
            <CredentialsForm mode={AuthMode::Login} />
        </AuthLayout>
    }
}

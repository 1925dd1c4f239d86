use model::forms::AuthMode;
use yew::prelude::*;

use crate::components::auth::{AuthLayout, CredentialsForm};

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    html! {
        <AuthLayout image_url="https://images.unsplash.com/photo-1507048331197-7d4c21882c86?auto=format&q=75&fit=crop&w=1000">
            <CredentialsForm mode={AuthMode::Signup} />
        </AuthLayout>
    }
}

use model::forms::{AuthMode, CredentialsDraft};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::input::event_value;
use crate::common::loading::ButtonSpinner;
use crate::common::toast::{use_toast, ToastType};
use crate::settings;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: AuthMode,
}

fn heading(mode: AuthMode) -> (&'static str, &'static str) {
    match mode {
        AuthMode::Login => ("Welcome back", "Sign in to your account to continue"),
        AuthMode::Signup => ("Create an account", "Join the community and start sharing recipes"),
    }
}

/// Sign-in and sign-up form. Only checks that the fields are filled in;
/// nobody is actually authenticated.
#[function_component(CredentialsForm)]
pub fn credentials_form(props: &Props) -> Html {
    let mode = props.mode;
    let draft = use_state(|| CredentialsDraft::new(mode));
    let is_submitting = use_state(|| false);
    let toast = use_toast();
    let navigator = use_navigator();

    let edit = |apply: fn(&mut CredentialsDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*draft).clone();
            apply(&mut next, event_value(&e));
            draft.set(next);
        })
    };
    let on_name = edit(|d, v| d.name = v);
    let on_email = edit(|d, v| d.email = v);
    let on_password = edit(|d, v| d.password = v);

    let on_submit = {
        let draft = draft.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(err) = draft.submit() {
                log::warn!("Credentials rejected: {}", err);
                toast.show(ToastType::Error, Some("Error"), err.to_string());
                return;
            }

            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();

            is_submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let delay = settings::get_settings().submit_delay_ms;
                if delay > 0 {
                    gloo_timers::future::TimeoutFuture::new(delay).await;
                }
                is_submitting.set(false);
                let (title, message) = match mode {
                    AuthMode::Login => ("Signed in", "Welcome back to CulinaryCraft!"),
                    AuthMode::Signup => ("Account created", "Welcome to CulinaryCraft!"),
                };
                log::info!("{:?} accepted", mode);
                toast.show(ToastType::Success, Some(title), message.to_string());
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            });
        })
    };

    let busy = *is_submitting;
    let (title, subtitle) = heading(mode);

    html! {
        <div class="w-full max-w-md space-y-6">
            <div class="text-center space-y-1">
                <h1 class="text-2xl font-bold">{title}</h1>
                <p class="text-base-content/70">{subtitle}</p>
            </div>
            <form onsubmit={on_submit} class="space-y-4">
                if mode == AuthMode::Signup {
                    <div class="form-control">
                        <label class="label" for="name"><span class="label-text">{"Full name"}</span></label>
                        <input id="name" type="text" class="input input-bordered w-full" placeholder="John Doe"
                            value={draft.name.clone()} oninput={on_name} disabled={busy} />
                    </div>
                }
                <div class="form-control">
                    <label class="label" for="email"><span class="label-text">{"Email"}</span></label>
                    <input id="email" type="email" class="input input-bordered w-full" placeholder="you@example.com"
                        value={draft.email.clone()} oninput={on_email} disabled={busy} />
                </div>
                <div class="form-control">
                    <label class="label" for="password"><span class="label-text">{"Password"}</span></label>
                    <input id="password" type="password" class="input input-bordered w-full"
                        value={draft.password.clone()} oninput={on_password} disabled={busy} />
                </div>
                <button type="submit" class="btn btn-primary w-full" disabled={busy}>
                    if busy {
                        <ButtonSpinner />
                    }
                    {match mode {
                        AuthMode::Login => "Sign In",
                        AuthMode::Signup => "Create Account",
                    }}
                </button>
            </form>
            <p class="text-center text-sm">
                {match mode {
                    AuthMode::Login => html! {
                        <>{"Don't have an account? "}<Link<Route> to={Route::Signup} classes="link link-primary">{"Sign up"}</Link<Route>></>
                    },
                    AuthMode::Signup => html! {
                        <>{"Already have an account? "}<Link<Route> to={Route::Login} classes="link link-primary">{"Sign in"}</Link<Route>></>
                    },
                }}
            </p>
        </div>
    }
}

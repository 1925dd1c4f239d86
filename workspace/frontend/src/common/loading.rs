use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_else(|| AttrValue::from("Preparing the kitchen..."))]
    pub text: AttrValue,
}

/// Full-width placeholder while a page's data is on its way.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-16 gap-3" role="status">
            <i class="fas fa-utensils text-3xl text-primary animate-bounce"></i>
            <span class="loading loading-dots loading-md text-primary"></span>
            <p class="text-sm text-base-content/60">{&props.text}</p>
        </div>
    }
}

/// Inline spinner for buttons in a pending state ("Saving...").
#[function_component(ButtonSpinner)]
pub fn button_spinner() -> Html {
    html! { <span class="loading loading-spinner loading-sm"></span> }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: String,
    #[prop_or_default]
    pub message: Option<String>,
    #[prop_or_else(|| "fas fa-utensils".to_string())]
    pub icon: String,
    /// Optional call to action below the message.
    #[prop_or_default]
    pub children: Children,
}

/// Dashed placeholder panel for tabs and lists with nothing to show.
#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center text-center gap-3 py-12 px-6 border-2 border-dashed border-base-300 rounded-box">
            <i class={classes!(props.icon.clone(), "text-4xl", "text-base-content/40")}></i>
            <h3 class="text-lg font-semibold">{&props.title}</h3>
            {if let Some(message) = &props.message {
                html! { <p class="text-sm text-base-content/60 max-w-md">{message}</p> }
            } else {
                html! {}
            }}
            { for props.children.iter() }
        </div>
    }
}

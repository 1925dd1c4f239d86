use yew::prelude::*;
use crate::hooks::FetchState;
use crate::Route;
use super::empty_state::EmptyState;
use super::error::ErrorDisplay;
use super::loading::Loading;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<AttrValue>,
    /// Offered next to the error when the load fails.
    #[prop_or_default]
    pub back_to: Option<Route>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        // `render` may close over filter state.
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.back_to == other.back_to
            && self.render == other.render
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows loading spinner
/// - Error: shows error display with optional retry
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => match &props.loading_text {
            Some(text) => html! { <Loading text={text.clone()} /> },
            None => html! { <Loading /> },
        },
        FetchState::Error(err) => {
            html! {
                <ErrorDisplay
                    message={err.clone()}
                    on_retry={props.on_retry.clone()}
                    back_to={props.back_to.clone()}
                />
            }
        }
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}

/// Renders a list into a card grid, or an empty state when there is nothing to show.
#[derive(Properties)]
pub struct CardGridProps<T: Clone + PartialEq + 'static> {
    pub items: Vec<T>,
    pub render_item: Callback<T, Html>,
    #[prop_or_else(|| "Nothing here yet".to_string())]
    pub empty_title: String,
    #[prop_or_default]
    pub empty_message: Option<String>,
    #[prop_or_else(|| "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6".to_string())]
    pub container_class: String,
}

impl<T: Clone + PartialEq + 'static> PartialEq for CardGridProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
            && self.empty_title == other.empty_title
            && self.empty_message == other.empty_message
            && self.container_class == other.container_class
    }
}

#[function_component(CardGrid)]
pub fn card_grid<T>(props: &CardGridProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    if props.items.is_empty() {
        html! {
            <EmptyState title={props.empty_title.clone()} message={props.empty_message.clone()} />
        }
    } else {
        html! {
            <div class={props.container_class.clone()}>
                { for props.items.iter().map(|item| props.render_item.emit(item.clone())) }
            </div>
        }
    }
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// How a failed load reads to the cook, judged from the facade's error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The recipe, profile or plan is not in the store.
    NotFound,
    /// The record belongs to someone else.
    NotOwner,
    Failed,
}

impl ErrorKind {
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if lower.contains("not found") {
            ErrorKind::NotFound
        } else if lower.starts_with("only the author") {
            ErrorKind::NotOwner
        } else {
            ErrorKind::Failed
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "We couldn't find that",
            ErrorKind::NotOwner => "Not your recipe",
            ErrorKind::Failed => "Something burned in the kitchen",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "fas fa-magnifying-glass",
            ErrorKind::NotOwner => "fas fa-lock",
            ErrorKind::Failed => "fas fa-fire-burner",
        }
    }

    /// Retrying only helps when the failure was not about the record itself.
    pub fn retryable(&self) -> bool {
        matches!(self, ErrorKind::Failed)
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Overrides the heading picked from the message.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Where the "back" button leads, e.g. the explore page for a missing recipe.
    #[prop_or_default]
    pub back_to: Option<Route>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    let kind = ErrorKind::classify(&props.message);
    log::warn!("Showing {:?} error: {}", kind, props.message);

    let title = props
        .title
        .clone()
        .unwrap_or_else(|| AttrValue::from(kind.title()));

    let retry = match &props.on_retry {
        Some(on_retry) if kind.retryable() => {
            let on_retry = on_retry.clone();
            html! {
                <button
                    class="btn btn-primary btn-sm"
                    onclick={Callback::from(move |_| {
                        log::debug!("Retrying failed load");
                        on_retry.emit(());
                    })}
                >
                    <i class="fas fa-redo"></i>
                    {" Try Again"}
                </button>
            }
        }
        _ => html! {},
    };

    let back = match &props.back_to {
        Some(route) => html! {
            <Link<Route> to={route.clone()} classes="btn btn-ghost btn-sm">
                <i class="fas fa-arrow-left mr-1"></i>{"Go back"}
            </Link<Route>>
        },
        None => html! {},
    };

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class={classes!(kind.icon(), "text-2xl")}></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{title}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            <div class="flex gap-2">
                {back}
                {retry}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::ModelError;

    #[test]
    fn test_store_errors_are_classified() {
        let missing = ModelError::not_found("Recipe", "404").to_string();
        assert_eq!(ErrorKind::classify(&missing), ErrorKind::NotFound);
        assert!(!ErrorKind::NotFound.retryable());

        let foreign = ModelError::NotOwner("delete this comment").to_string();
        assert_eq!(ErrorKind::classify(&foreign), ErrorKind::NotOwner);

        assert_eq!(ErrorKind::classify("network hiccup"), ErrorKind::Failed);
        assert!(ErrorKind::Failed.retryable());
    }
}

use model::LikeState;
use yew::prelude::*;

use crate::common::toast::use_toast;

/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Local like/unlike toggle for a card or detail view.
///
/// Flips the flag, moves the count by one and raises an info toast such as
/// "You liked this recipe". Nothing is sent anywhere.
#[hook]
pub fn use_like_toggle(initial: LikeState, subject: &'static str) -> (LikeState, Callback<MouseEvent>) {
    let state = use_state(|| initial);
    let toast = use_toast();

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let (next, change) = (*state).toggled();
            log::info!("Like toggled on {}: {:?} -> {} likes", subject, change, next.count);
            state.set(next);
            toast.show_info(change.message(subject));
        })
    };

    (*state, on_toggle)
}

/// Two-state toggle for save/follow buttons, with one toast per direction.
#[hook]
pub fn use_flag_toggle(
    initial: bool,
    on_message: &'static str,
    off_message: &'static str,
) -> (bool, Callback<MouseEvent>) {
    let flag = use_state(|| initial);
    let toast = use_toast();

    let on_toggle = {
        let flag = flag.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*flag;
            log::info!("Toggle switched {}", if next { "on" } else { "off" });
            flag.set(next);
            toast.show_info(if next { on_message } else { off_message }.to_string());
        })
    };

    (*flag, on_toggle)
}

/// Icon class for a like button.
pub fn like_icon(liked: bool) -> &'static str {
    if liked {
        "fas fa-heart text-error"
    } else {
        "far fa-heart"
    }
}

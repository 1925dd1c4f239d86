use yew::prelude::*;
use std::future::Future;
use std::rc::Rc;
use crate::hooks::FetchState;
use crate::common::toast::use_toast;

/// Runs `fetch_fn(deps)` on mount and again whenever `deps` changes; the
/// returned callback re-runs it on demand (retry buttons).
#[hook]
pub fn use_fetch_with_refetch<T, D, F, Fut>(
    deps: D,
    fetch_fn: F,
) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast = use_toast();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback(deps.clone(), move |_, deps: &D| {
            let fetch_state = fetch_state.clone();
            let toast = toast.clone();
            let fetch_fn = fetch_fn.clone();
            let deps = deps.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)(deps);
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        fetch_state.set(FetchState::Error(err.clone()));
                        toast.show_error(err);
                    }
                }
            });
        })
    };

    // Fetch on mount and on dependency change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}

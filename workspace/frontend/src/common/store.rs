use std::ops::Deref;
use std::rc::Rc;

use model::{CookbookStore, MockStore};
use yew::prelude::*;

/// Shared handle on the data store the pages read through.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn CookbookStore>);

impl StoreHandle {
    pub fn new(store: impl CookbookStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for StoreHandle {
    type Target = dyn CookbookStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Children,
}

/// Provides the mock store to everything below it.
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_memo((), |_| {
        log::debug!("Creating mock cookbook store");
        StoreHandle::new(MockStore::new())
    });

    html! {
        <ContextProvider<StoreHandle> context={(*store).clone()}>
            {props.children.clone()}
        </ContextProvider<StoreHandle>>
    }
}

#[hook]
pub fn use_store() -> StoreHandle {
    let fallback = use_memo((), |_| StoreHandle::new(MockStore::new()));
    use_context::<StoreHandle>().unwrap_or_else(|| {
        log::warn!("No StoreProvider mounted, using a private mock store");
        (*fallback).clone()
    })
}

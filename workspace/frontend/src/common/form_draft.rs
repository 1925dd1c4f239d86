use std::ops::Deref;
use std::rc::Rc;

use model::forms::Editable;
use yew::prelude::*;

/// A form draft held by `use_reducer`.
///
/// Dispatched changes land on the newest draft, so a callback that fires
/// late (an image read finishing) cannot roll back fields typed meanwhile.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft<D>(pub D);

impl<D> Deref for FormDraft<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.0
    }
}

impl<D: Editable + Clone> Reducible for FormDraft<D> {
    type Action = D::Change;

    fn reduce(self: Rc<Self>, change: D::Change) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(change);
        Rc::new(FormDraft(next))
    }
}

/// Shorthand for `use_reducer` over a [`FormDraft`].
#[hook]
pub fn use_form_draft<D, F>(init: F) -> UseReducerHandle<FormDraft<D>>
where
    D: Editable + Clone + 'static,
    F: FnOnce() -> D,
{
    use_reducer(move || FormDraft(init()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::forms::{RecipeChange, RecipeDraft};

    #[test]
    fn test_late_image_keeps_typed_title() {
        let opened = Rc::new(FormDraft(RecipeDraft::new()));
        let typed = opened.reduce(RecipeChange::Title("Pad Thai".into()));
        let loaded = typed.reduce(RecipeChange::Image(Some("data:image/png;base64,AAAA".into())));

        assert_eq!(loaded.title, "Pad Thai");
        assert_eq!(loaded.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }
}

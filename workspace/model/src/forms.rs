//! Edit buffers behind the create/edit forms.
//!
//! Each draft keeps one field per input and only checks that required
//! fields are present when submitted. A successful `submit` hands back the
//! payload a future API would receive.

pub mod credentials;
pub mod entry_list;
pub mod learning_plan;
pub mod profile;
pub mod recipe;
pub mod tag_set;

pub use credentials::{AuthMode, CredentialsDraft};
pub use entry_list::EntryList;
pub use learning_plan::LearningPlanDraft;
pub use profile::{ProfileChange, ProfileDraft};
pub use recipe::{RecipeChange, RecipeDraft};
pub use tag_set::TagSet;

/// A draft that takes one field change at a time.
///
/// Changes carry only the new value, so they can be applied to whatever the
/// draft holds by then, e.g. after an image finished loading.
pub trait Editable {
    type Change;

    fn apply(&mut self, change: Self::Change);
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collects the names of blank required fields.
pub(crate) fn missing(fields: impl IntoIterator<Item = (&'static str, bool)>) -> Vec<&'static str> {
    fields
        .into_iter()
        .filter_map(|(name, present)| (!present).then_some(name))
        .collect()
}

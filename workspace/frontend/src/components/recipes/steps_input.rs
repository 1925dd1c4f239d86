use model::forms::EntryList;
use yew::prelude::*;

use super::entry_list_input::EntryListInput;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub steps: EntryList,
    pub on_change: Callback<EntryList>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(StepsInput)]
pub fn steps_input(props: &Props) -> Html {
    html! {
        <EntryListInput
            list={props.steps.clone()}
            on_change={props.on_change.clone()}
            placeholder="Describe step"
            add_label="Add Step"
            numbered=true
            disabled={props.disabled}
        />
    }
}

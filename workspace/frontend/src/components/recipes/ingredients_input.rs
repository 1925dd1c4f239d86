use model::forms::EntryList;
use yew::prelude::*;

use super::entry_list_input::EntryListInput;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ingredients: EntryList,
    pub on_change: Callback<EntryList>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(IngredientsInput)]
pub fn ingredients_input(props: &Props) -> Html {
    html! {
        <EntryListInput
            list={props.ingredients.clone()}
            on_change={props.on_change.clone()}
            placeholder="e.g. 2 cups flour"
            add_label="Add Ingredient"
            disabled={props.disabled}
        />
    }
}

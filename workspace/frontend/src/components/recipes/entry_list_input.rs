use model::forms::EntryList;
use yew::prelude::*;

use crate::common::input::event_value;
use crate::common::toast::use_toast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub list: EntryList,
    pub on_change: Callback<EntryList>,
    pub placeholder: String,
    pub add_label: String,
    /// Steps are numbered and multi-line; ingredients are single-line.
    #[prop_or_default]
    pub numbered: bool,
    #[prop_or_default]
    pub disabled: bool,
}

/// Editable ordered list that always keeps at least one row.
#[function_component(EntryListInput)]
pub fn entry_list_input(props: &Props) -> Html {
    let toast = use_toast();

    let on_add = {
        let list = props.list.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = list.clone();
            next.push_blank();
            on_change.emit(next);
        })
    };

    let rows = props.list.entries().iter().enumerate().map(|(index, value)| {
        let on_edit = {
            let list = props.list.clone();
            let on_change = props.on_change.clone();
            let toast = toast.clone();
            move |value: String| {
                let mut next = list.clone();
                match next.set(index, value) {
                    Ok(()) => on_change.emit(next),
                    Err(e) => toast.show_error(e.to_string()),
                }
            }
        };

        let on_remove = {
            let list = props.list.clone();
            let on_change = props.on_change.clone();
            let toast = toast.clone();
            Callback::from(move |_| {
                let mut next = list.clone();
                match next.remove(index) {
                    Ok(_) => on_change.emit(next),
                    Err(e) => toast.show_warning(e.to_string()),
                }
            })
        };

        let oninput = Callback::from(move |e: InputEvent| on_edit(event_value(&e)));
        let field = if props.numbered {
            html! {
                <textarea
                    class="textarea textarea-bordered flex-1"
                    rows="2"
                    placeholder={format!("{} {}", props.placeholder, index + 1)}
                    value={value.clone()}
                    {oninput}
                    disabled={props.disabled}
                />
            }
        } else {
            html! {
                <input
                    type="text"
                    class="input input-bordered flex-1"
                    placeholder={props.placeholder.clone()}
                    value={value.clone()}
                    {oninput}
                    disabled={props.disabled}
                />
            }
        };

        html! {
            <div key={index} class="flex items-start gap-2">
                if props.numbered {
                    <span class="badge badge-primary mt-3">{index + 1}</span>
                }
                {field}
                <button
                    type="button"
                    class="btn btn-ghost btn-square"
                    aria-label={format!("remove {}", props.list.kind())}
                    onclick={on_remove}
                    disabled={props.disabled || !props.list.can_remove()}
                >
                    <i class="fas fa-minus-circle"></i>
                </button>
            </div>
        }
    });

    html! {
        <div class="space-y-2">
            { for rows }
            <button type="button" class="btn btn-outline btn-sm" onclick={on_add} disabled={props.disabled}>
                <i class="fas fa-plus-circle"></i>{format!(" {}", props.add_label)}
            </button>
        </div>
    }
}

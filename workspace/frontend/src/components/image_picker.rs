use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::common::file_reader::{read_as_data_url, selected_file};
use crate::common::toast::use_toast;

/// An image picked from disk, already converted for previewing.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedImage {
    pub file_name: String,
    pub data_url: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub preview: Option<String>,
    pub on_pick: Callback<PickedImage>,
    #[prop_or_default]
    pub on_clear: Option<Callback<()>>,
    #[prop_or_else(|| "Upload an image".to_string())]
    pub label: String,
    #[prop_or_default]
    pub disabled: bool,
}

/// Cover image drop zone with a preview of the picked file.
#[function_component(ImagePicker)]
pub fn image_picker(props: &Props) -> Html {
    let reading = use_state(|| false);
    let toast = use_toast();

    let on_change = {
        let on_pick = props.on_pick.clone();
        let reading = reading.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = selected_file(&input) else {
                return;
            };
            let file_name = file.name();
            let on_pick = on_pick.clone();
            let reading = reading.clone();
            let toast = toast.clone();

            reading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match read_as_data_url(file).await {
                    Ok(data_url) => {
                        log::info!("Image '{}' loaded for preview", file_name);
                        on_pick.emit(PickedImage { file_name, data_url });
                    }
                    Err(e) => toast.show_error(format!("Could not load image: {}", e)),
                }
                reading.set(false);
            });
            // Allow picking the same file again after clearing.
            input.set_value("");
        })
    };

    let clear_button = match (&props.preview, &props.on_clear) {
        (Some(_), Some(on_clear)) => {
            let on_clear = on_clear.clone();
            html! {
                <button
                    type="button"
                    class="btn btn-circle btn-sm btn-error absolute top-2 right-2"
                    aria-label="remove image"
                    onclick={Callback::from(move |_| on_clear.emit(()))}
                    disabled={props.disabled}
                >
                    <i class="fas fa-times"></i>
                </button>
            }
        }
        _ => html! {},
    };

    html! {
        <div class="relative">
            {match &props.preview {
                Some(src) => html! {
                    <img src={src.clone()} alt="Preview" class="w-full h-48 object-cover rounded-box" />
                },
                None => html! {
                    <label class="flex flex-col items-center justify-center h-48 border-2 border-dashed border-base-300 rounded-box cursor-pointer hover:bg-base-200">
                        if *reading {
                            <span class="loading loading-spinner"></span>
                        } else {
                            <i class="fas fa-cloud-upload-alt text-3xl text-base-content/40"></i>
                            <span class="text-sm mt-2">{&props.label}</span>
                        }
                        <input type="file" accept="image/*" class="hidden" onchange={on_change} disabled={props.disabled} />
                    </label>
                },
            }}
            {clear_button}
        </div>
    }
}

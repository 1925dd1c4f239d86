use model::entities::author::initial_of;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "w-8 text-sm",
            AvatarSize::Medium => "w-10",
            AvatarSize::Large => "w-28 text-4xl",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub name: String,
    #[prop_or_default]
    pub src: Option<String>,
    #[prop_or_default]
    pub size: AvatarSize,
}

/// Round avatar image, falling back to the name's initial.
#[function_component(Avatar)]
pub fn avatar(props: &Props) -> Html {
    match &props.src {
        Some(src) => html! {
            <div class="avatar">
                <div class={classes!("rounded-full", props.size.class())}>
                    <img src={src.clone()} alt={props.name.clone()} />
                </div>
            </div>
        },
        None => html! {
            <div class="avatar placeholder">
                <div class={classes!("bg-primary", "text-primary-content", "rounded-full", props.size.class())}>
                    <span>{initial_of(&props.name)}</span>
                </div>
            </div>
        },
    }
}

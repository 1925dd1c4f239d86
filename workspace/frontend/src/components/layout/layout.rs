use yew::prelude::*;
use super::navbar::Navbar;
use super::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

/// App chrome for signed-in pages: navbar on top, collapsible sidebar on the left.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    let sidebar_open = use_state(|| false);

    {
        let title = props.title.clone();
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(&format!("{} | CulinaryCraft", title));
            }
            || ()
        });
    }

    let on_toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| {
            log::trace!("Sidebar toggled, open: {}", !*sidebar_open);
            sidebar_open.set(!*sidebar_open);
        })
    };

    let on_close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(false))
    };

    html! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <Navbar on_toggle_sidebar={on_toggle_sidebar} />
            <div class="flex flex-1">
                <Sidebar open={*sidebar_open} on_close={on_close_sidebar} />
                <main class="flex-1 p-4 md:p-6 overflow-y-auto">
                    <div class="container mx-auto max-w-6xl">
                        { for props.children.iter() }
                    </div>
                </main>
            </div>
        </div>
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: usize,
    pub title: Option<String>,
    pub message: String,
    pub toast_type: ToastType,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList(Vec<Toast>);

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.0.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList(toasts))
    }
}

/// Handle for raising notifications from any component under [`ToastProvider`].
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    add_toast: Callback<(ToastType, Option<String>, String)>,
}

impl ToastContext {
    /// A context whose toasts go nowhere, for components rendered outside a provider.
    fn detached() -> Self {
        Self {
            add_toast: Callback::from(|(_, _, message): (ToastType, Option<String>, String)| {
                log::warn!("Toast dropped, no ToastProvider mounted: {}", message);
            }),
        }
    }

    pub fn show(&self, toast_type: ToastType, title: Option<&str>, message: String) {
        self.add_toast
            .emit((toast_type, title.map(str::to_string), message));
    }

    pub fn show_info(&self, message: String) {
        self.show(ToastType::Info, None, message);
    }

    pub fn show_success(&self, message: String) {
        self.show(ToastType::Success, None, message);
    }

    pub fn show_warning(&self, message: String) {
        self.show(ToastType::Warning, None, message);
    }

    pub fn show_error(&self, message: String) {
        self.show(ToastType::Error, None, message);
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::detached)
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let dispatcher = toasts.dispatcher();
        use_callback((), move |(toast_type, title, message): (ToastType, Option<String>, String), _| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next - 1
            };

            log::debug!("Showing {:?} toast #{}: {}", toast_type, id, message);
            dispatcher.dispatch(ToastAction::Add(Toast {
                id,
                title,
                message,
                toast_type,
            }));

            let dispatcher = dispatcher.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || {
                dispatcher.dispatch(ToastAction::Remove(id));
            })
            .forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.0.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = toasts.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <div class="flex flex-col">
                                {if let Some(title) = &toast.title {
                                    html! { <span class="font-semibold">{title}</span> }
                                } else {
                                    html! {}
                                }}
                                <span>{&toast.message}</span>
                            </div>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

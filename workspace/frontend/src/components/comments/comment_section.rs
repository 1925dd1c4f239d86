use model::CommentThread;
use model::entities::prelude::Comment;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::input::event_value;
use crate::common::store::use_store;
use crate::common::toast::use_toast;
use crate::components::avatar::Avatar;
use crate::hooks::like_icon;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub recipe_id: String,
    pub comments: Vec<Comment>,
}

/// Comment list of a recipe. Posting, liking and deleting only change this
/// view's copy of the thread.
#[function_component(CommentSection)]
pub fn comment_section(props: &Props) -> Html {
    let thread = use_state(|| CommentThread::new(props.comments.clone()));
    let text = use_state(String::new);
    let store = use_store();
    let toast = use_toast();
    let me = use_memo((), move |_| store.current_user().as_author());

    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| text.set(event_value(&e)))
    };

    let on_post = {
        let thread = thread.clone();
        let text = text.clone();
        let toast = toast.clone();
        let me = me.clone();
        let recipe_id = props.recipe_id.clone();
        Callback::from(move |_| {
            let mut next = (*thread).clone();
            let posted = next.post(&text, &me).map(|c| c.id.clone());
            match posted {
                Ok(id) => {
                    log::info!("Posted comment {} on recipe {}", id, recipe_id);
                    thread.set(next);
                    text.set(String::new());
                    toast.show_success("Comment posted successfully!".to_string());
                }
                Err(err) => toast.show_error(err.to_string()),
            }
        })
    };

    let on_like = {
        let thread = thread.clone();
        let toast = toast.clone();
        move |id: String| {
            let thread = thread.clone();
            let toast = toast.clone();
            Callback::from(move |_| {
                let mut next = (*thread).clone();
                match next.toggle_like(&id) {
                    Ok(change) => {
                        thread.set(next);
                        toast.show_info(change.message("comment"));
                    }
                    Err(err) => toast.show_error(err.to_string()),
                }
            })
        }
    };

    let on_delete = {
        let thread = thread.clone();
        let toast = toast.clone();
        let my_id = me.id.clone();
        move |id: String| {
            let thread = thread.clone();
            let toast = toast.clone();
            let my_id = my_id.clone();
            Callback::from(move |_| {
                let mut next = (*thread).clone();
                match next.delete(&id, &my_id) {
                    Ok(_) => {
                        thread.set(next);
                        toast.show_success("Comment deleted successfully!".to_string());
                    }
                    Err(err) => toast.show_error(err.to_string()),
                }
            })
        }
    };

    html! {
        <section class="space-y-6">
            <h2 class="text-xl font-semibold">{format!("Comments ({})", thread.len())}</h2>

            <div class="flex gap-3">
                <Avatar name={me.name.clone()} src={me.avatar.clone()} />
                <div class="flex-1">
                    <textarea
                        class="textarea textarea-bordered w-full resize-none"
                        rows="3"
                        placeholder="Add a comment..."
                        value={(*text).clone()}
                        oninput={on_text}
                    />
                    <div class="flex justify-end mt-2">
                        <button class="btn btn-primary btn-sm" onclick={on_post}>{"Post"}</button>
                    </div>
                </div>
            </div>

            <div class="space-y-6">
                { for thread.comments().iter().map(|comment| {
                    let author_route = Route::author_profile(&comment.author.id);
                    html! {
                        <div key={comment.id.clone()} class="flex gap-3">
                            <Link<Route> to={author_route.clone()}>
                                <Avatar name={comment.author.name.clone()} src={comment.author.avatar.clone()} />
                            </Link<Route>>
                            <div class="flex-1 space-y-1">
                                <div class="flex items-center justify-between">
                                    <div class="flex items-center gap-2">
                                        <Link<Route> to={author_route} classes="font-medium hover:underline">
                                            {&comment.author.name}
                                        </Link<Route>>
                                        <span class="text-xs text-base-content/60">{&comment.created_at}</span>
                                    </div>
                                    if CommentThread::can_delete(comment, &me.id) {
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            aria-label="delete comment"
                                            onclick={on_delete(comment.id.clone())}
                                        >
                                            <i class="fas fa-trash-alt"></i>{" Delete"}
                                        </button>
                                    }
                                </div>
                                <p class="text-sm">{&comment.text}</p>
                                <button class="btn btn-ghost btn-xs gap-1 px-0" onclick={on_like(comment.id.clone())}>
                                    <i class={like_icon(comment.likes.liked)}></i>
                                    <span>{comment.likes.count}</span>
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

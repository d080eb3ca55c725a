use leptos::*;
use leptos_router::*;

use limeleaf_boundary::Comment;
use limeleaf_core::{
    routes::PostLocation,
    thread::{self, Collapse, TriggerAction},
};

use crate::components::{CommentInteraction, UserInfo};

/// The comments below a post.
///
/// A comment the user has just written is shown first.
#[component]
pub fn CommentSection(
    comments: Vec<Comment>,
    #[prop(into)] new_comment: Signal<Option<Comment>>,
    location: PostLocation,
    logged_in: Signal<bool>,
) -> impl IntoView {
    let new_comment_location = location.clone();
    let comments = thread::top_level(&comments)
        .cloned()
        .map(|comment| {
            view! { <SingleComment comment depth = 0 location = location.clone() logged_in /> }
        })
        .collect_view();

    view! {
      <section class="mx-4 space-y-3">
        {
          move || new_comment.get().map(|comment| {
            let location = new_comment_location.clone();
            view! { <SingleComment comment depth = 0 location logged_in highlighted = true /> }
          })
        }
        { comments }
      </section>
    }
}

/// A comment and, up to the maximum depth, its replies.
#[component]
pub fn SingleComment(
    comment: Comment,
    depth: usize,
    location: PostLocation,
    logged_in: Signal<bool>,
    #[prop(optional)] highlighted: bool,
) -> impl IntoView {
    // -- signals -- //

    let collapse = RwSignal::new(Collapse::default());
    let opened = Signal::derive(move || collapse.get().is_open());
    let body = RwSignal::new(comment.comment.clone());

    let navigate = use_navigate();
    let reply_count = comment.replies.len();
    let thread_path = location.comment_thread(&comment.id);
    let opens_thread = thread::trigger_action(depth, reply_count) == TriggerAction::OpenThread;

    // -- callbacks -- //

    let on_click = move |ev: ev::MouseEvent| {
        if collapse.try_update(|c| c.click(depth, reply_count)) == Some(TriggerAction::OpenThread) {
            ev.stop_propagation();
            log::debug!("Open comment thread {thread_path}");
            navigate(&thread_path, NavigateOptions::default());
        }
    };

    let on_key_down = move |ev: ev::KeyboardEvent| collapse.update(|c| c.key_down(&ev.code()));
    let on_key_up = move |ev: ev::KeyboardEvent| collapse.update(|c| c.key_up(&ev.code()));

    // -- view -- //

    let marker = if opens_thread {
        view! { <span class="mr-2 material-symbols-outlined text-secondary">"open_in_new"</span> }
            .into_view()
    } else if reply_count > 0 {
        view! {
          <span class = move || {
            if collapse.get().is_open() {
                "w-5 h-5 mr-2 rotate-180 transition-transform material-symbols-outlined text-secondary"
            } else {
                "w-5 h-5 mr-2 transition-transform material-symbols-outlined text-secondary"
            }
          }>
            "keyboard_arrow_down"
          </span>
        }
        .into_view()
    } else {
        ().into_view()
    };

    let replies = thread::inline_replies(&comment, depth)
        .into_iter()
        .cloned()
        .enumerate()
        .map(|(index, reply)| {
            let class = if index == 0 {
                "pl-4 md:pl-6 lg:pl-8 comment-curve-connection"
            } else {
                "pl-4 md:pl-6 lg:pl-8"
            };
            view! {
              <div class = class>
                <SingleComment comment = reply depth = { depth + 1 } location = location.clone() logged_in />
              </div>
            }
        })
        .collect_view();

    let Comment {
        id,
        profile,
        created,
        likes,
        dislikes,
        reaction_score,
        ..
    } = comment;
    let trigger_class = if highlighted {
        "w-full py-1 pl-2 text-left text-white bg-gray-600 cursor-pointer comment-left-line"
    } else {
        "w-full py-1 pl-2 text-left text-white cursor-pointer comment-left-line"
    };

    view! {
      <div class="rounded bg-white/5">
        <div
          role="button"
          tabindex="0"
          class = trigger_class
          on:click = on_click
          on:keydown = on_key_down
          on:keyup = on_key_up
        >
          <div class="flex justify-between">
            <UserInfo profile created body opened fresh = highlighted />
            { marker }
          </div>
        </div>
        <CommentInteraction
          comment_id = id
          likes
          dislikes
          score = reaction_score.unwrap_or_default()
          body
          logged_in
        />
        <div class:hidden = move || !opened.get()>
          { replies }
        </div>
      </div>
    }
    .into_view()
}

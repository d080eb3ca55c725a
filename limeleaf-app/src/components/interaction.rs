use leptos::*;

use limeleaf_boundary::{EditComment, Reactions};
use limeleaf_core::{
    reaction::{format_score, ReactionState, Vote},
    status,
    validate::{is_empty_html, CommentInvalidation},
};
use limeleaf_frontend_api::{Error, Reaction};

use crate::{absolute_url, backend, components::HtmlEditor, copy_to_clipboard};

/// What a like or dislike refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionTarget {
    Post(String),
    Comment(String),
}

impl ReactionTarget {
    async fn react(self, reaction: Reaction) -> Result<Reactions, Error> {
        let api = backend();
        match self {
            Self::Post(id) => api.react_to_post(&id, reaction).await,
            Self::Comment(id) => api.react_to_comment(&id, reaction).await,
        }
    }
}

#[component]
pub fn ReactionBar(
    target: ReactionTarget,
    likes: u64,
    dislikes: u64,
    score: f64,
    logged_in: Signal<bool>,
) -> impl IntoView {
    // -- signals -- //

    let state = RwSignal::new(ReactionState::new(likes, dislikes, score));

    // -- actions -- //

    let react = create_action(move |reaction: &Reaction| {
        let reaction = *reaction;
        let target = target.clone();
        async move {
            match target.clone().react(reaction).await {
                Ok(reactions) => {
                    log::debug!("Reacted with {reaction:?} to {target:?}");
                    state.update(|s| s.reconcile(reactions));
                }
                Err(err) => {
                    log::warn!("Unable to react to {target:?}: {err}");
                }
            }
        }
    });

    // -- callbacks -- //

    let on_like = move |_: ev::MouseEvent| {
        state.update(ReactionState::like);
        react.dispatch(Reaction::Like);
    };

    let on_dislike = move |_: ev::MouseEvent| {
        state.update(ReactionState::dislike);
        react.dispatch(Reaction::Dislike);
    };

    let vote_class = move |vote: Vote| {
        if state.get().vote == vote {
            "flex items-center gap-1 text-secondary"
        } else {
            "flex items-center gap-1 hover:text-secondary disabled:opacity-50"
        }
    };

    view! {
      <div class="flex items-center gap-3 text-sm">
        <button
          class = move || vote_class(Vote::Like)
          disabled = move || !logged_in.get()
          on:click = on_like
        >
          <span class="material-symbols-outlined">"thumb_up"</span>
          { move || state.get().likes }
        </button>
        <span>{ move || format_score(state.get().score) }</span>
        <button
          class = move || vote_class(Vote::Dislike)
          disabled = move || !logged_in.get()
          on:click = on_dislike
        >
          <span class="material-symbols-outlined">"thumb_down"</span>
          { move || state.get().dislikes }
        </button>
      </div>
    }
}

/// Copies the absolute link of `path` to the clipboard.
#[component]
pub fn ShareButton(path: String) -> impl IntoView {
    let (copied, set_copied) = create_signal(false);

    let share = create_action(move |path: &String| {
        let path = path.clone();
        async move {
            let result = match absolute_url(&path) {
                Ok(url) => copy_to_clipboard(&url).await,
                Err(err) => Err(err),
            };
            match result {
                Ok(()) => set_copied.set(true),
                Err(err) => log::warn!("Unable to copy link: {err}"),
            }
        }
    });

    view! {
      <button
        class="flex items-center gap-1 hover:text-secondary"
        on:click = move |_| share.dispatch(path.clone())
      >
        <span class="material-symbols-outlined">"share"</span>
        { move || if copied.get() { "Copied" } else { "Share" } }
      </button>
    }
}

/// Reactions, share link and comment counter of a post.
#[component]
pub fn PostInteraction(
    post_id: String,
    likes: u64,
    dislikes: u64,
    score: f64,
    comment_count: u64,
    /// Route of the post.
    path: String,
    logged_in: Signal<bool>,
) -> impl IntoView {
    let comments_path = format!("{path}#comments");
    view! {
      <div class="flex flex-wrap items-center gap-4 p-2 text-white bg-sideNav">
        <ReactionBar target = ReactionTarget::Post(post_id) likes dislikes score logged_in />
        <a href = comments_path class="flex items-center gap-1 text-sm hover:text-secondary">
          <span class="material-symbols-outlined">"chat_bubble"</span>
          { comment_count }
        </a>
        <ShareButton path />
      </div>
    }
}

/// Reactions and the edit form of a comment.
///
/// A successful edit replaces `body`.
#[component]
pub fn CommentInteraction(
    comment_id: String,
    likes: u64,
    dislikes: u64,
    score: f64,
    body: RwSignal<String>,
    logged_in: Signal<bool>,
) -> impl IntoView {
    let editing = RwSignal::new(false);
    let edit_id = comment_id.clone();

    view! {
      <div class="flex items-center gap-3 py-1 pl-2 text-white">
        <ReactionBar target = ReactionTarget::Comment(comment_id) likes dislikes score logged_in />
        <Show when = move || logged_in.get() && !editing.get()>
          <button class="text-sm hover:text-secondary" on:click = move |_| editing.set(true)>
            "Edit"
          </button>
        </Show>
      </div>
      <Show when = move || editing.get()>
        <CommentEdit comment_id = edit_id.clone() body editing />
      </Show>
    }
}

#[component]
fn CommentEdit(comment_id: String, body: RwSignal<String>, editing: RwSignal<bool>) -> impl IntoView {
    // -- signals -- //

    let draft = RwSignal::new(body.get_untracked());
    let error = RwSignal::new(None::<String>);

    // -- actions -- //

    let save = create_action(move |html: &String| {
        let id = comment_id.clone();
        let edit = EditComment {
            comment: html.clone(),
        };
        async move {
            backend().edit_comment(&id, &edit).await?;
            Ok::<_, Error>(edit.comment)
        }
    });

    create_effect(move |_| match save.value().get() {
        Some(Ok(html)) => {
            log::info!("Comment edited");
            body.set(html);
            editing.set(false);
        }
        Some(Err(err)) => {
            log::warn!("Unable to edit comment: {err}");
            error.update(|msg| status::comment_submission(err.status()).apply(msg));
        }
        None => {}
    });

    // -- callbacks -- //

    let on_save = move |_: ev::MouseEvent| {
        let html = draft.get_untracked();
        if is_empty_html(&html) {
            error.set(Some(CommentInvalidation::Empty.to_string()));
            return;
        }
        save.dispatch(html);
    };

    let on_change = move |html: String| {
        error.set(None);
        draft.set(html);
    };

    view! {
      <div class="max-w-2xl p-2 space-y-2">
        <HtmlEditor on_change initial = body.get_untracked() />
        <p class="text-destructive">{ move || error.get().map(|msg| format!("*{msg}")) }</p>
        <div class="flex justify-end gap-2">
          <button
            class="px-3 py-1 rounded bg-destructive"
            on:click = move |_| editing.set(false)
          >
            "Cancel"
          </button>
          <button
            class="px-3 py-1 rounded text-foreground bg-secondary"
            disabled = move || save.pending().get()
            on:click = on_save
          >
            { move || if save.pending().get() { "Loading..." } else { "Save" } }
          </button>
        </div>
      </div>
    }
}

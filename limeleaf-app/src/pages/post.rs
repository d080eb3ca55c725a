use leptos::*;
use leptos_router::*;

use limeleaf_boundary::{Comment, NewComment, Post};
use limeleaf_core::{
    routes::PostLocation,
    status,
    thread::{self, author_name},
    validate::Validate,
};

use crate::{
    backend,
    components::{
        CommentSection, CommunitySidebar, HtmlEditor, Loading, PostHeader, PostInteraction,
    },
};

const LOGIN_REQUIRED: &str = "You need to be logged in to leave a comment.";

#[component]
pub fn SinglePost(logged_in: Signal<bool>) -> impl IntoView {
    // -- signals -- //

    let params = use_params_map();

    // -- actions -- //

    let fetch_post = create_action(move |id: &String| {
        let id = id.to_owned();
        async move { backend().post(&id).await }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(id) = params.with(|p| p.get("id").cloned()) {
            log::debug!("Load post {id}");
            fetch_post.dispatch(id);
        }
    });

    move || {
        if fetch_post.pending().get() {
            return view! { <Loading /> }.into_view();
        }
        match fetch_post.value().get() {
            Some(Ok(post)) => view! { <PostDetail post logged_in /> }.into_view(),
            None => view! { <Loading /> }.into_view(),
            Some(Err(err)) => {
                log::warn!("Unable to load post: {err}");
                view! {
                  <h1 class="block p-4 mx-auto text-4xl font-bold text-white">
                    { status::SERVER_ERROR }
                  </h1>
                }
                .into_view()
            }
        }
    }
}

#[component]
fn PostDetail(post: Post, logged_in: Signal<bool>) -> impl IntoView {
    let Post {
        id,
        title,
        body,
        author,
        community,
        likes,
        dislikes,
        comments,
        reaction_score,
        created,
    } = post;
    let location = PostLocation {
        community_name: community.name.clone(),
        title: title.clone(),
        post_id: id.clone(),
    };
    let path = location.path();
    let new_comment = RwSignal::new(None::<Comment>);

    view! {
      <div class="flex mb-4">
        <div class="flex-1 space-y-5">
          <PostHeader
            community_name = community.name.clone()
            community_icon = community.community_icon.clone()
            author = author_name(&author).to_string()
            created
          />
          <section class="px-4 space-y-4">
            <h1 class="max-w-4xl py-1 overflow-hidden text-4xl font-bold text-white break-words">
              { title }
            </h1>
            <div class="max-w-4xl bg-white border-2 border-gray-600 rounded">
              <div class="max-w-4xl p-3 mb-4 overflow-hidden prose text-black" inner_html = body></div>
              <PostInteraction
                post_id = id.clone()
                likes
                dislikes
                score = reaction_score
                comment_count = comments.count()
                path
                logged_in
              />
            </div>
          </section>
          <div class="sr-only" id="comments"></div>
          <CommentForm post_id = id logged_in new_comment />
          <CommentSection
            comments = comments.list().to_vec()
            new_comment
            location
            logged_in
          />
        </div>
        <CommunitySidebar community />
      </div>
    }
}

/// Writes a top level comment.
///
/// The created comment is handed over via `new_comment`.
#[component]
fn CommentForm(
    post_id: String,
    logged_in: Signal<bool>,
    new_comment: RwSignal<Option<Comment>>,
) -> impl IntoView {
    // -- signals -- //

    let editor_open = RwSignal::new(false);
    let comment = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);

    // -- actions -- //

    let create_comment = create_action(move |new: &NewComment| {
        let new = new.clone();
        let post_id = post_id.clone();
        async move { backend().create_comment(&post_id, &new).await }
    });

    // -- effects -- //

    create_effect(move |_| match create_comment.value().get() {
        Some(Ok(created)) => {
            log::info!("Successfully created comment {}", created.id);
            message.update(|msg| status::comment_submission(200).apply(msg));
            new_comment.set(Some(thread::fresh(created)));
        }
        Some(Err(err)) => {
            log::warn!("Unable to create comment: {err}");
            message.update(|msg| status::comment_submission(err.status()).apply(msg));
        }
        None => {}
    });

    // -- callbacks -- //

    let on_change = move |html: String| {
        message.set(None);
        comment.set(html);
    };

    let on_cancel = move |_: ev::MouseEvent| {
        editor_open.set(false);
        message.set(None);
        comment.set(String::new());
    };

    let on_submit = move |_: ev::MouseEvent| {
        let new = NewComment {
            comment: comment.get_untracked(),
            is_reply: false,
        };
        if let Err(err) = new.validate() {
            message.set(Some(err.to_string()));
            return;
        }
        create_comment.dispatch(new);
        comment.set(String::new());
        editor_open.set(false);
    };

    let error_message = move || {
        message
            .get()
            .map(|msg| view! { <p class="text-destructive">{ format!("*{msg}") }</p> })
    };

    view! {
      <form class="max-w-2xl mx-4" on:submit = |ev| ev.prevent_default()>
        { move ||
          if !logged_in.get() {
            view! { <h1 class="text-xl font-bold text-white">{ LOGIN_REQUIRED }</h1> }.into_view()
          } else if editor_open.get() {
            view! {
              <label class="text-xl font-medium text-white" for="comment">"Comment"</label>
              <HtmlEditor id="comment" on_change />
              { error_message }
              <div class="flex justify-end gap-2 my-2">
                <button type="button" class="px-3 py-1 rounded bg-destructive" on:click = on_cancel>
                  "Cancel"
                </button>
                <button type="button" class="px-3 py-1 rounded text-foreground bg-secondary" on:click = on_submit>
                  { move || if create_comment.pending().get() { "Loading..." } else { "Submit" } }
                </button>
              </div>
            }
            .into_view()
          } else {
            view! {
              <button
                type="button"
                class="w-full px-4 py-2 text-left bg-white rounded-full text-black/50"
                on:click = move |_| editor_open.set(true)
              >
                "Comment"
              </button>
              { error_message }
            }
            .into_view()
          }
        }
      </form>
    }
}

use leptos::*;
use leptos_router::*;

use limeleaf_boundary::Comment;
use limeleaf_core::{
    routes::{decode_param, PostLocation},
    status, thread,
};

use crate::{
    backend,
    components::{CommentInteraction, Loading, SingleComment, UserInfo},
};

fn param(params: &ParamsMap, key: &str) -> String {
    params.get(key).map(|value| decode_param(value)).unwrap_or_default()
}

/// A comment and its replies, opened from a deeply nested comment.
#[component]
pub fn CommentThread(logged_in: Signal<bool>) -> impl IntoView {
    // -- signals -- //

    let params = use_params_map();
    let location = Signal::derive(move || {
        params.with(|p| PostLocation {
            community_name: param(p, "communityName"),
            title: param(p, "post"),
            post_id: param(p, "id"),
        })
    });

    // -- actions -- //

    let fetch_thread = create_action(move |id: &String| {
        let id = id.to_owned();
        async move { backend().comment_thread(&id).await }
    });

    // -- effects -- //

    create_effect(move |_| {
        if let Some(id) = params.with(|p| p.get("commentId").cloned()) {
            log::debug!("Load comment thread {id}");
            fetch_thread.dispatch(id);
        }
    });

    view! {
      <div class="flex gap-2 p-2">
        <div class="flex-1">
          { move || {
              if fetch_thread.pending().get() {
                  return view! { <Loading /> }.into_view();
              }
              match fetch_thread.value().get() {
                  Some(Ok(comment)) => {
                      view! { <Thread comment location = location.get() logged_in /> }.into_view()
                  }
                  None => view! { <Loading /> }.into_view(),
                  Some(Err(err)) => {
                      log::warn!("Unable to load comment thread: {err}");
                      view! { <p class="text-center text-white">{ status::SERVER_ERROR }</p> }.into_view()
                  }
              }
          }}
        </div>
      </div>
    }
}

#[component]
fn Thread(comment: Comment, location: PostLocation, logged_in: Signal<bool>) -> impl IntoView {
    let original_post = location.path();
    let replies = thread::inline_replies(&comment, 0)
        .into_iter()
        .cloned()
        .map(|reply| {
            view! { <SingleComment comment = reply depth = 0 location = location.clone() logged_in /> }
        })
        .collect_view();
    let Comment {
        id,
        profile,
        comment: text,
        created,
        likes,
        dislikes,
        reaction_score,
        ..
    } = comment;
    let body = RwSignal::new(text);

    view! {
      <div class="flex flex-col gap-4">
        <div>
          <A href = original_post class="text-3xl font-bold underline text-secondary hover:text-white/50">
            "View Original Post"
          </A>
        </div>
        <div class="text-white">
          <h2 class="font-semibold">"Comment Thread for:"</h2>
          <UserInfo profile created body opened = Signal::derive(|| true) />
          <CommentInteraction
            comment_id = id
            likes
            dislikes
            score = reaction_score.unwrap_or_default()
            body
            logged_in
          />
        </div>
        <div class="pl-4 space-y-2 md:pl-6 lg:pl-8">{ replies }</div>
      </div>
    }
}

use leptos::*;
use leptos_router::*;

use limeleaf_boundary::Post;
use limeleaf_core::{routes, status};
use limeleaf_frontend_api::{Error, PostFilter};

use crate::{
    backend,
    components::{Loading, PostCard},
};

fn post_list(result: Option<Result<Vec<Post>, Error>>, logged_in: Signal<bool>) -> View {
    match result {
        Some(Ok(posts)) if posts.is_empty() => {
            view! { <p class="p-4 text-center text-white">"No posts could be found."</p> }.into_view()
        }
        Some(Ok(posts)) => posts
            .into_iter()
            .map(|post| view! { <PostCard post logged_in /> })
            .collect_view(),
        None => view! { <Loading /> }.into_view(),
        Some(Err(err)) => {
            log::warn!("Unable to load posts: {err}");
            view! { <p class="p-4 text-center text-white">{ status::SERVER_ERROR }</p> }.into_view()
        }
    }
}

#[component]
pub fn PostFeed(filter: PostFilter, logged_in: Signal<bool>) -> impl IntoView {
    // -- actions -- //

    let fetch_posts = create_action(move |filter: &PostFilter| {
        let filter = filter.clone();
        async move { backend().posts(&filter).await }
    });

    fetch_posts.dispatch(filter);

    view! {
      <section class="flex flex-col gap-4 p-4">
        { move ||
          if fetch_posts.pending().get() {
            view! { <Loading /> }.into_view()
          } else {
            post_list(fetch_posts.value().get(), logged_in)
          }
        }
      </section>
    }
}

/// Posts of the community named in the route.
#[component]
pub fn CommunityFeed(logged_in: Signal<bool>) -> impl IntoView {
    // -- signals -- //

    let params = use_params_map();
    let community_name = Signal::derive(move || {
        params.with(|p| {
            p.get("communityName")
                .map(|name| routes::decode_param(name))
                .unwrap_or_default()
        })
    });

    // -- actions -- //

    let fetch_posts = create_action(move |filter: &PostFilter| {
        let filter = filter.clone();
        async move { backend().posts(&filter).await }
    });

    // -- effects -- //

    create_effect(move |_| {
        let name = community_name.get();
        if !name.is_empty() {
            log::debug!("Load posts of community {name}");
            fetch_posts.dispatch(PostFilter::Community(name));
        }
    });

    view! {
      <section class="flex flex-col gap-4 p-4">
        <div class="flex items-center justify-between w-full max-w-4xl p-4 mx-auto rounded bg-sideNav">
          <h1 class="text-4xl font-black text-secondary">{ move || community_name.get() }</h1>
          <Show when = move || logged_in.get()>
            <A
              href = move || routes::create_post_in(&community_name.get())
              class="px-2 py-1 font-bold rounded text-foreground bg-secondary hover:bg-white/80"
            >
              "Create post"
            </A>
          </Show>
        </div>
        { move ||
          if fetch_posts.pending().get() {
            view! { <Loading /> }.into_view()
          } else {
            post_list(fetch_posts.value().get(), logged_in)
          }
        }
      </section>
    }
}

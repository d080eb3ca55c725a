use leptos::*;
use leptos_router::*;
use time::OffsetDateTime;

use limeleaf_boundary::Post;
use limeleaf_core::{routes, thread::author_name, timestamp::time_since};

use crate::components::PostInteraction;

/// Community, author and age of a post.
#[component]
pub fn PostHeader(
    community_name: String,
    community_icon: String,
    author: String,
    created: String,
) -> impl IntoView {
    let community_path = routes::community(&community_name);
    let since = time_since(&created, OffsetDateTime::now_utc());
    view! {
      <section class="flex items-center gap-2 pb-2 mx-4 mt-2 text-white border-b-2 border-sideNav">
        <A href = community_path.clone()>
          <img
            src = community_icon
            class="w-12 h-12 border-2 rounded-full border-white/20"
            alt="community icon"
          />
        </A>
        <div>
          <div class="space-x-2">
            <A href = community_path class="text-lg font-medium hover:text-secondary">
              { community_name }
            </A>
            <span class="text-sm font-light text-white/50">{ since }</span>
          </div>
          <span class="text-sm font-normal tracking-wide">{ author }</span>
        </div>
      </section>
    }
}

/// A post as listed in a feed.
#[component]
pub fn PostCard(post: Post, logged_in: Signal<bool>) -> impl IntoView {
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
    let path = routes::post(&community.name, &title, &id);

    view! {
      <article class="max-w-4xl mx-auto overflow-hidden rounded bg-white/5">
        <PostHeader
          community_name = community.name
          community_icon = community.community_icon
          author = author_name(&author).to_string()
          created
        />
        <A href = path.clone() class="block px-4 py-2 hover:opacity-80">
          <h2 class="text-2xl font-bold text-white break-words">{ title }</h2>
          <div class="max-h-40 overflow-hidden text-white/80 prose prose-invert" inner_html = body></div>
        </A>
        <PostInteraction
          post_id = id
          likes
          dislikes
          score = reaction_score
          comment_count = comments.count()
          path
          logged_in
        />
      </article>
    }
}

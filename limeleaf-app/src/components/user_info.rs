use leptos::*;
use time::OffsetDateTime;

use limeleaf_boundary::Profile;
use limeleaf_core::{thread::author_name, timestamp::time_since};

/// Author, age and (if opened) the HTML body of a post or comment.
#[component]
pub fn UserInfo(
    profile: Profile,
    created: String,
    #[prop(into)] body: Signal<String>,
    #[prop(into)] opened: Signal<bool>,
    /// Comments that were just created have no name fallback.
    #[prop(optional)]
    fresh: bool,
) -> impl IntoView {
    let name = if fresh {
        profile.username().unwrap_or_default().to_string()
    } else {
        author_name(&profile).to_string()
    };
    let since = time_since(&created, OffsetDateTime::now_utc());

    view! {
      <div class="flex flex-col gap-1">
        <div class="flex items-center gap-2">
          {
            profile.profile_img.map(|src| view! {
              <img class="w-8 h-8 border-2 rounded-full border-white/20" src = src alt="" />
            })
          }
          <span class="font-medium">{ name }</span>
          <span class="text-sm font-light text-white/50">{ since }</span>
        </div>
        <Show when = move || opened.get()>
          <div class="prose prose-invert max-w-none" inner_html = move || body.get()></div>
        </Show>
      </div>
    }
}

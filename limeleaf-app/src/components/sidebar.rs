use leptos::*;
use leptos_router::*;

use limeleaf_boundary::Community;
use limeleaf_core::{follow::Follow, routes, timestamp::date};

#[component]
fn SidebarSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
      <div class="px-2 pt-2 space-y-1">
        <h2 class="text-lg font-black text-secondary">{ title }</h2>
        <div class="pb-2 tracking-wider border-b-[1px] border-white">
          { children() }
        </div>
      </div>
    }
}

/// Details of the community a post belongs to.
#[component]
pub fn CommunitySidebar(community: Community) -> impl IntoView {
    let Community {
        name,
        description,
        community_icon,
        followers,
        tags,
        follows_community,
        created,
        ..
    } = community;
    let followers = Follow::new(followers, follows_community).followers_label();
    let created = created.as_deref().map(date).unwrap_or_default();
    let icon_alt = format!("{name} icon");
    let community_path = routes::community(&name);
    let tags = tags
        .into_iter()
        .map(|tag| view! { <span class="px-2 text-sm rounded-full text-foreground bg-secondary">{ tag }</span> })
        .collect_view();

    view! {
      <aside class="hidden w-80 mx-10 rounded lg:block bg-sideNav h-fit">
        <div class="px-2 pt-2">
          <div class="flex items-center gap-2 pb-2">
            <img
              src = community_icon
              alt = icon_alt
              class="w-16 h-16 border-2 rounded-full border-white/20"
            />
            <A href = community_path>
              <h3 class="mb-2 text-4xl font-black text-center text-secondary hover:opacity-80">
                { name }
              </h3>
            </A>
          </div>
          <p class="pb-2 border-b-[1px] border-white">{ description }</p>
        </div>
        <SidebarSection title="Followers">{ followers }</SidebarSection>
        <SidebarSection title="Tags">
          <div class="flex flex-wrap gap-2">{ tags }</div>
        </SidebarSection>
        <SidebarSection title="Created">{ created }</SidebarSection>
      </aside>
    }
}

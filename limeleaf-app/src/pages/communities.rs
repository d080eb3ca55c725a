use leptos::*;
use leptos_router::*;

use limeleaf_boundary::Community;
use limeleaf_core::{
    follow::Follow,
    pagination::{Pager, DEFAULT_PAGE_SIZE},
    routes, status,
};

use crate::{backend, components::Loading};

/// Popular communities, fetched page by page.
#[component]
pub fn Communities(logged_in: Signal<bool>) -> impl IntoView {
    // -- signals -- //

    let pager = RwSignal::new(Pager::<Community>::new(DEFAULT_PAGE_SIZE));
    let (error, set_error) = create_signal(false);

    // -- actions -- //

    let fetch_page = create_action(move |page: &usize| {
        let page = *page;
        let limit = pager.with_untracked(Pager::limit);
        async move {
            match backend().popular_communities(page, limit).await {
                Ok(communities) => {
                    log::debug!("Received {} communities of page {page}", communities.len());
                    pager.update(|p| p.receive(communities));
                }
                Err(err) => {
                    log::error!("Unable to fetch communities: {err}");
                    set_error.set(true);
                }
            }
        }
    });

    fetch_page.dispatch(pager.with_untracked(Pager::page));

    // -- callbacks -- //

    let on_see_more = move |_: ev::MouseEvent| {
        if let Some(page) = pager.try_update(Pager::see_more).flatten() {
            fetch_page.dispatch(page);
        }
    };

    let on_see_less = move |_: ev::MouseEvent| pager.update(Pager::see_less);

    view! {
      <div class="p-2 pb-4 space-y-4">
        <div class="py-5 flex items-start justify-center rounded bg-sideNav border-[1px] border-white/20">
          <h1 class="text-4xl font-bold text-white">"Popular Communities"</h1>
        </div>
        <Show when = move || error.get()>
          <p class="text-center text-white">{ status::SERVER_ERROR }</p>
        </Show>
        <Show when = move || fetch_page.pending().get()>
          <Loading />
        </Show>
        <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
          { move || pager.with(|p| {
              p.items()
                .iter()
                .cloned()
                .map(|community| view! { <CommunityCard community logged_in /> })
                .collect_view()
          })}
        </div>
        <div class="flex justify-center">
          { move ||
            if pager.with(Pager::has_more) {
              view! {
                <button class="px-4 py-1 rounded text-foreground bg-secondary" on:click = on_see_more>
                  "See More"
                </button>
              }
            } else {
              view! {
                <button class="px-4 py-1 rounded text-foreground bg-secondary" on:click = on_see_less>
                  "See Less"
                </button>
              }
            }
          }
        </div>
      </div>
    }
}

#[component]
fn CommunityCard(community: Community, logged_in: Signal<bool>) -> impl IntoView {
    let Community {
        name,
        description,
        community_icon,
        community_bg,
        followers,
        follows_community,
        ..
    } = community;

    // -- signals -- //

    let follow = RwSignal::new(Follow::new(followers, follows_community));

    // -- actions -- //

    let toggle_follow = create_action(move |name: &String| {
        let name = name.clone();
        async move {
            match backend().toggle_follow(&name).await {
                Ok(()) => log::info!("Toggled follow of community {name}"),
                Err(err) => log::warn!("Unable to toggle follow of community {name}: {err}"),
            }
        }
    });

    // -- callbacks -- //

    let follow_name = name.clone();
    let on_follow = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        follow.update(Follow::toggle);
        toggle_follow.dispatch(follow_name.clone());
    };

    let community_path = routes::community(&name);
    let bg_alt = format!("{name} background image");
    let icon_alt = format!("{name} icon");

    view! {
      <A
        href = community_path
        class="hover:border-secondary border-[1px] border-white/20 rounded text-white space-y-2 max-h-[420px]"
      >
        <img class="w-full rounded max-h-72" src = community_bg alt = bg_alt />
        <div class="flex items-center gap-2 p-1">
          <img class="h-10 w-10 border-[1px] border-white/20 rounded-full" src = community_icon alt = icon_alt />
          <h2 class="text-xl font-bold">{ name }</h2>
          <h3 class="font-light text-white/80 text-md">{ move || follow.get().followers_label() }</h3>
          <Show when = move || logged_in.get()>
            <button
              class="h-6 px-2 rounded text-foreground bg-secondary"
              on:click = on_follow.clone()
            >
              { move || follow.get().button_label() }
            </button>
          </Show>
          <Show when = move || toggle_follow.pending().get()>
            <Loading />
          </Show>
        </div>
        <p class="px-2 pb-3 overflow-hidden font-normal max-h-40">{ description }</p>
      </A>
    }
}

use leptos::*;
use leptos_router::*;

use crate::Page;

#[component]
pub fn NavBar<F>(logged_in: Signal<bool>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Copy,
{
    let (menu_open, set_menu_open) = create_signal(false);
    let navigate = use_navigate();

    let logout = move || {
        on_logout();
        set_menu_open.set(false);
        navigate(Page::Home.path(), NavigateOptions::default());
    };

    view! {
      <nav class="fixed top-0 z-50 w-full p-4 text-primary bg-foreground">
        <div class="flex items-center justify-between">

          // Logo
          <A href = Page::Home.path() class="text-4xl font-black hover:text-secondary">"LimeLeaf"</A>

          // Menu items
          <div class="hidden gap-8 items-center md:flex">
            <FeedMenu />
            <UserMenu logged_in on_logout = logout.clone() />
          </div>

          // Hamburger Icon
          <button
            class = {move ||
              if menu_open.get() {
                "open block hamburger md:hidden focus:outline-none"
              } else {
                "block hamburger md:hidden focus:outline-none"
              }
            }
            on:click = move |_| set_menu_open.update(|s|*s = !*s)
          >
            <span class="hamburger-top"></span>
            <span class="hamburger-middle"></span>
            <span class="hamburger-bottom"></span>
          </button>
        </div>

        // Mobile Menu
        <div class="md:hidden">
          <menu
            class = {move ||
              if menu_open.get() {
                "absolute flex flex-col items-center py-8 mt-4 space-y-6 font-bold bg-sideNav left-6 right-6 drop-shadow-md"
              } else {
                "hidden"
              }
            }>
            <FeedMenu />
            <UserMenu logged_in on_logout = logout />
          </menu>
        </div>
      </nav>
    }
}

#[component]
fn FeedMenu() -> impl IntoView {
    view! {
      <MenuItem page = Page::Home label = "Home" />
      <MenuItem page = Page::Popular label = "Popular" />
      <MenuItem page = Page::Communities label = "Communities" />
    }
}

#[component]
fn UserMenu<F>(logged_in: Signal<bool>, on_logout: F) -> impl IntoView
where
    F: Fn() + 'static + Clone,
{
    move || {
        if logged_in.get() {
            let on_logout = on_logout.clone();
            view! {
              <A href = Page::CreatePost.path() class="px-2 py-1 font-black rounded text-foreground bg-secondary hover:bg-white/80">"Create"</A>
              <MenuItem page = Page::CreateCommunity label = "Create a Community" />
              <a href="#" class="hover:text-secondary" on:click = move |ev| {
                ev.prevent_default();
                on_logout();
              }>
                "Logout"
              </a>
            }
            .into_view()
        } else {
            view! { <span class="text-white/50">"Log in to post and comment"</span> }.into_view()
        }
    }
}

#[component]
fn MenuItem(page: Page, label: &'static str) -> impl IntoView {
    view! {
      <A href=page.path() class="hover:text-secondary">{ label }</A>
    }
}

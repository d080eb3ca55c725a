use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use leptos_router::*;
use wasm_bindgen_futures::JsFuture;

use limeleaf_frontend_api::{self as api, AccessToken, PostFilter};

mod pages;
use pages::*;

mod components;
use components::*;

/// Backend base URL, set at compile time.
///
/// Without it the API is expected on the serving origin.
const API_URL: &str = match option_env!("LIMELEAF_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

const ACCESS_TOKEN_STORAGE_KEY: &str = "accessToken";

/// Reads the stored access token.
///
/// The token is not JSON encoded, so the raw storage is used.
fn stored_token() -> Option<String> {
    LocalStorage::raw()
        .get_item(ACCESS_TOKEN_STORAGE_KEY)
        .ok()
        .flatten()
}

/// API with the token that is currently stored.
///
/// Must be created right before each request
/// because the token might have changed in the meantime.
fn backend() -> api::Api {
    api::Api::new(API_URL, AccessToken::from_stored(stored_token()))
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let logged_in = RwSignal::new(stored_token().is_some());

    log::debug!("User is logged in: {}", logged_in.get_untracked());

    // -- callbacks -- //

    let on_logout = move || {
        log::info!("Logout: delete token from LocalStorage");
        LocalStorage::delete(ACCESS_TOKEN_STORAGE_KEY);
        logged_in.set(false);
    };

    let logged_in = Signal::from(logged_in);

    view! {
      <Router>
        <NavBar logged_in on_logout />
        <main class="pt-20">
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <PostFeed filter = PostFilter::Home logged_in /> }
            />
            <Route
              path=Page::Popular.path()
              view=move || view! { <PostFeed filter = PostFilter::Popular logged_in /> }
            />
            <Route
              path=Page::Communities.path()
              view=move || view! { <Communities logged_in /> }
            />
            <Route
              path=Page::CreateCommunity.path()
              view=move || view! { <CreateCommunity logged_in /> }
            />
            <Route
              path=Page::CreatePost.path()
              view=move || view! { <CreatePost /> }
            />
            <Route
              path=Page::Community.path()
              view=move || view! { <CommunityFeed logged_in /> }
            />
            <Route
              path=Page::CreatePostInCommunity.path()
              view=move || view! { <CreatePost /> }
            />
            <Route
              path=Page::Post.path()
              view=move || view! { <SinglePost logged_in /> }
            />
            <Route
              path=Page::CommentThread.path()
              view=move || view! { <CommentThread logged_in /> }
            />
          </Routes>
        </main>
      </Router>
    }
}

async fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let clipboard = window().navigator().clipboard();
    let promise = clipboard.write_text(text);
    JsFuture::from(promise).await.map_err(|err| {
        anyhow!(err
            .as_string()
            .unwrap_or_else(|| "unknown JS error".to_string()))
    })?;
    Ok(())
}

/// Absolute URL of a route for sharing.
fn absolute_url(path: &str) -> anyhow::Result<String> {
    let origin = window()
        .location()
        .origin()
        .map_err(|_| anyhow!("location origin is not available"))?;
    Ok(format!("{origin}{path}"))
}

use leptos::*;
use leptos_router::*;

use limeleaf_boundary::NewPost;
use limeleaf_core::{routes, status, validate::Validate};
use limeleaf_frontend_api::Error;

use crate::{backend, components::HtmlEditor, Page};

#[component]
pub fn CreatePost() -> impl IntoView {
    // -- signals -- //

    let params = use_params_map();
    let community_name = Signal::derive(move || {
        params.with(|p| {
            p.get("communityName")
                .map(|name| routes::decode_param(name))
                .unwrap_or_default()
        })
    });
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let navigate = use_navigate();
    let navigate_to_community = navigate.clone();

    // -- actions -- //

    let fetch_followed = create_action(|_: &()| async {
        match backend().followed_communities().await {
            Ok(followed) => Some(followed.followed_communities),
            Err(err) => {
                log::warn!("Unable to fetch followed communities: {err}");
                None
            }
        }
    });

    let create_post = create_action(move |new: &NewPost| {
        let new = new.clone();
        async move {
            let post = backend().create_post(&new).await?;
            Ok::<_, Error>(routes::post(&new.community_name, &post.title, &post.id))
        }
    });

    fetch_followed.dispatch(());

    // -- effects -- //

    create_effect(move |_| match create_post.value().get() {
        Some(Ok(path)) => {
            log::info!("Successfully created post {path}");
            navigate(&path, NavigateOptions::default());
        }
        Some(Err(err)) => {
            log::warn!("Unable to create post: {err}");
            error.set(Some(status::post_submission_error(err.status()).to_string()));
        }
        None => {}
    });

    // -- callbacks -- //

    let on_select = move |ev: ev::Event| {
        let name = event_target_value(&ev);
        error.set(None);
        log::debug!("Selected community {name}");
        navigate_to_community(&routes::create_post_in(&name), NavigateOptions::default());
    };

    let on_body_change = move |html: String| {
        error.set(None);
        body.set(html);
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let new = NewPost {
            community_name: community_name.get_untracked(),
            title: title.get_untracked(),
            body: body.get_untracked(),
        };
        if let Err(err) = new.validate() {
            error.set(Some(err.to_string()));
            return;
        }
        create_post.dispatch(new);
    };

    let follows_nothing = move || {
        fetch_followed
            .value()
            .with(|followed| matches!(followed, Some(Some(list)) if list.is_empty()))
    };

    let community_options = move || {
        let selected = community_name.get();
        fetch_followed
            .value()
            .get()
            .flatten()
            .unwrap_or_default()
            .into_iter()
            .map(|community| {
                let is_selected = community.name == selected;
                view! {
                  <option value = community.name.clone() selected = is_selected>
                    { community.name }
                  </option>
                }
            })
            .collect_view()
    };

    view! {
      <form class="max-w-xl p-4 mx-auto space-y-4" on:submit = on_submit>
        <h1 class="text-3xl font-black text-white">"Create Post"</h1>
        <Show when = follows_nothing>
          <p class="p-2 text-white rounded bg-destructive/50">
            "You must be following the community you wish to post to. View "
            <A href = Page::Communities.path() class="underline text-secondary hover:text-gray-400">
              "Communities"
            </A>
          </p>
        </Show>
        <select class="w-48 p-2 text-black rounded" on:change = on_select>
          <option value="" disabled=true selected = move || community_name.get().is_empty()>
            "Pick a community"
          </option>
          { community_options }
        </select>
        <div>
          <label class="text-xl font-medium text-white" for="title">"Title"</label>
          <input
            id="title"
            type="text"
            class="w-full p-2 text-black rounded"
            on:input = move |ev| {
              error.set(None);
              title.set(event_target_value(&ev));
            }
          />
        </div>
        <div>
          <label class="text-xl font-medium text-white" for="body">"Body"</label>
          <HtmlEditor id="body" on_change = on_body_change />
        </div>
        { move || error.get().map(|msg| view! { <p class="text-destructive">{ format!("*{msg}") }</p> }) }
        <button
          type="submit"
          class="block px-4 py-1 ml-auto rounded text-foreground bg-secondary"
          disabled = move || create_post.pending().get()
        >
          "Submit"
        </button>
      </form>
    }
}


use leptos::*;
use leptos_router::*;
use web_sys::HtmlInputElement;

use limeleaf_core::{
    routes,
    status::{self, MessageUpdate},
    validate::{parse_tags, CommunityDraft, Validate},
};
use limeleaf_frontend_api::{Error, Image, NewCommunity};

use crate::backend;

const DEFAULT_ICONS: &[&str] = &[
    "/images/community/icon-leaf.png",
    "/images/community/icon-sun.png",
    "/images/community/icon-wave.png",
];

const DEFAULT_BACKGROUNDS: &[&str] = &[
    "/images/community/bg-forest.png",
    "/images/community/bg-desert.png",
    "/images/community/bg-ocean.png",
];

#[component]
pub fn CreateCommunity(logged_in: Signal<bool>) -> impl IntoView {
    // -- signals -- //

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let icon = RwSignal::new(None::<Image>);
    let background = RwSignal::new(None::<Image>);
    let message = RwSignal::new(None::<String>);

    let navigate = use_navigate();

    // -- actions -- //

    let create_community = create_action(move |community: &NewCommunity| {
        let community = community.clone();
        async move {
            let api = backend();
            let created = api.create_community(&community).await?;
            if let Err(err) = api.toggle_follow(&created.name).await {
                log::warn!("Unable to follow community {}: {err}", created.name);
            }
            Ok::<_, Error>(created.name)
        }
    });

    // -- effects -- //

    create_effect(move |_| match create_community.value().get() {
        Some(Ok(name)) => {
            log::info!("Community '{name}' has been created");
            message.update(|msg| MessageUpdate::Clear.apply(msg));
            navigate(&routes::community(&name), NavigateOptions::default());
        }
        Some(Err(err)) => {
            log::warn!("Unable to create community: {err}");
            message.update(|msg| status::community_creation(err.status()).apply(msg));
        }
        None => {}
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = CommunityDraft {
            name: name.get_untracked(),
            description: description.get_untracked(),
            icon_selected: icon.with_untracked(Option::is_some),
            background_selected: background.with_untracked(Option::is_some),
        };
        if let Err(err) = draft.validate() {
            message.set(Some(err.to_string()));
            return;
        }
        let (Some(icon), Some(background)) = (icon.get_untracked(), background.get_untracked())
        else {
            return;
        };
        let community = NewCommunity {
            name: draft.name.trim().to_string(),
            description: draft.description,
            icon,
            background,
            tags: parse_tags(&tags.get_untracked()),
        };
        log::debug!("Create community {}", community.name);
        create_community.dispatch(community);
    };

    view! {
      <form class="max-w-xl p-4 mx-auto space-y-4" on:submit = on_submit>
        <h1 class="text-3xl font-black text-white">"Create a Community"</h1>
        <Show when = move || !logged_in.get()>
          <p class="p-2 text-white rounded bg-destructive/50">{ status::INVALID_CREDENTIALS }</p>
        </Show>
        <TextField label="Name" id="communityName" value = name message />
        <TextField label="Description" id="description" value = description message />
        <TextField label="Tags (comma separated)" id="tags" value = tags message />
        <ImageSelector legend="Icon" id="communityIcon" defaults = DEFAULT_ICONS image = icon message />
        <ImageSelector legend="Background" id="communityBG" defaults = DEFAULT_BACKGROUNDS image = background message />
        { move || message.get().map(|msg| view! { <p class="text-destructive">{ format!("*{msg}") }</p> }) }
        <button
          type="submit"
          class="block px-4 py-1 ml-auto rounded text-foreground bg-secondary"
          disabled = move || create_community.pending().get()
        >
          { move || if create_community.pending().get() { "Loading..." } else { "Create" } }
        </button>
      </form>
    }
}

#[component]
fn TextField(
    label: &'static str,
    id: &'static str,
    value: RwSignal<String>,
    message: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
      <div>
        <label class="text-xl font-medium text-white" for = id>{ label }</label>
        <input
          id = id
          type="text"
          class="w-full p-2 text-black rounded"
          prop:value = move || value.get()
          on:input = move |ev| {
            message.set(None);
            value.set(event_target_value(&ev));
          }
        />
      </div>
    }
}

/// One of the default images or an uploaded file.
#[component]
fn ImageSelector(
    legend: &'static str,
    id: &'static str,
    defaults: &'static [&'static str],
    image: RwSignal<Option<Image>>,
    message: RwSignal<Option<String>>,
) -> impl IntoView {
    let default_images = defaults
        .iter()
        .copied()
        .enumerate()
        .map(|(index, url)| {
            let input_id = format!("{id}-{index}");
            let is_selected = move || image.with(|img| matches!(img, Some(Image::Url(u)) if u == url));
            view! {
              <input
                id = input_id.clone()
                type="radio"
                name = id
                class="appearance-none"
                value = url
                on:change = move |_| {
                  message.set(None);
                  image.set(Some(Image::Url(url.to_string())));
                }
              />
              <label
                for = input_id
                class = {move ||
                  if is_selected() {
                    "border-2 rounded border-secondary hover:cursor-pointer"
                  } else {
                    "border-2 rounded border-transparent hover:border-secondary hover:cursor-pointer"
                  }
                }
              >
                <img src = url alt = format!("{legend} {index}") class="w-full h-24 object-cover" />
              </label>
            }
        })
        .collect_view();

    let on_upload = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        message.set(None);
        image.set(file.map(Image::Upload));
    };

    view! {
      <fieldset class="space-y-3">
        <legend class="pb-2 text-3xl font-bold text-white border-b-2 border-white/50">{ legend }</legend>
        <div class="grid grid-cols-3 gap-2">{ default_images }</div>
        <label class="text-white" for = format!("{id}-upload")>"Or upload your own"</label>
        <input id = format!("{id}-upload") type="file" accept="image/*" class="text-white" on:change = on_upload />
      </fieldset>
    }
}

use leptos::*;

/// A minimal rich text input that reports its content as HTML.
#[component]
pub fn HtmlEditor(
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] initial: String,
    #[prop(optional)] id: &'static str,
) -> impl IntoView {
    view! {
      <div
        id = id
        class="p-2 text-black bg-white rounded prose min-h-20 cursor-text"
        contenteditable="true"
        inner_html = initial
        on:input = move |ev| {
          let html = event_target::<web_sys::Element>(&ev).inner_html();
          on_change.call(html);
        }
      ></div>
    }
}

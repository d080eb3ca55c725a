mod comment_tree;
mod editor;
mod interaction;
mod navbar;
mod post_card;
mod sidebar;
mod user_info;

pub use self::{
    comment_tree::*, editor::*, interaction::*, navbar::*, post_card::*, sidebar::*,
    user_info::*,
};

use leptos::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! { <p class="p-4 text-center text-white/50">"Loading ..."</p> }
}

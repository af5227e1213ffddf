//! Initials avatar used in the header and user lists.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

/// First letter of each of the two names, uppercased.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Round badge with the user's initials, or their picture when one is set.
#[component]
pub fn Avatar(
    first_name: String,
    last_name: String,
    #[prop(optional_no_strip)] avatar_url: Option<String>,
) -> impl IntoView {
    match avatar_url {
        Some(url) => view! {
            <img class="avatar" src=url alt=format!("{first_name} {last_name}")/>
        }
        .into_any(),
        None => {
            let text = initials(&first_name, &last_name);
            view! { <span class="avatar avatar--initials">{text}</span> }.into_any()
        }
    }
}

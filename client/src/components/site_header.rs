//! Top navigation bar with the session-aware account link.
//!
//! Signing out only resets the session; if the current page is private its
//! `RequireSession` wrapper takes care of leaving it.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let display_name = move || session.with(|s| s.current().identity().map(|identity| identity.display_name.clone()));

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Wayfarer"</a>
            <nav class="site-header__nav">
                <a href="/discover">"Discover"</a>
                <a href="/profile">"Profile"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <Show
                when=move || display_name().is_some()
                fallback=|| view! { <a href="/login" class="btn">"Sign in"</a> }
            >
                <a href="/profile" class="site-header__account">{move || display_name().unwrap_or_default()}</a>
                <button class="btn" on:click=move |_| session.update(SessionStore::sign_out)>"Sign out"</button>
            </Show>
        </header>
    }
}

//! Discover feed; the default page after signing in.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let greeting = move || {
        session.with(|s| match s.current().identity() {
            Some(identity) => format!("Welcome back, {}", identity.display_name),
            None => "Find inspiration for your next trip".to_owned(),
        })
    };

    view! {
        <section class="discover">
            <h1>{greeting}</h1>
            <p>"Trending stories and trips from fellow travelers."</p>
        </section>
    }
}

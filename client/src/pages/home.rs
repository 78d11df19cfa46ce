//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Discover Your Next Adventure"</h1>
            <p>"Explore handpicked destinations and plan the trip you keep talking about."</p>
            <div class="hero__actions">
                <a href="/discover" class="btn btn--primary">"Start exploring"</a>
                <a href="/profile" class="btn">"My trips"</a>
            </div>
        </section>
    }
}

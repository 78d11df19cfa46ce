//! Private account page for the signed-in visitor.

use leptos::prelude::*;

use crate::state::session::SessionStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let identity = move || session.with(|s| s.current().identity().cloned());

    view! {
        <section class="profile">
            <h1>{move || identity().map(|i| i.display_name).unwrap_or_default()}</h1>
            <p class="profile__email">{move || identity().map(|i| i.email).unwrap_or_default()}</p>
            <button class="btn" on:click=move |_| session.update(SessionStore::sign_out)>
                "Sign out"
            </button>
        </section>
    }
}
